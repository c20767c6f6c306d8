//! Decision rule: the category to promote next month.
//!
//! A single deterministic rule, not a statistical model: the category
//! with the greatest aggregated view count wins. Ties break to the
//! lexically smallest label so the answer is reproducible.

use crate::features::category_views;
use fp_common::{Error, FilmRecord, Result};

/// Category with the maximum summed `number_of_views`.
pub fn predict_top_category(records: &[FilmRecord]) -> Result<String> {
    // category_views is label-sorted; strict > keeps the lexically
    // smallest label among ties.
    category_views(records)
        .into_iter()
        .fold(None::<(String, u64)>, |best, agg| match best {
            Some((_, views)) if agg.total_views > views => {
                Some((agg.category, agg.total_views))
            }
            Some(best) => Some(best),
            None => Some((agg.category, agg.total_views)),
        })
        .map(|(category, _)| category)
        .ok_or(Error::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features;
    use crate::test_support::film;
    use proptest::prelude::*;

    #[test]
    fn predicts_max_category_scenario() {
        let table = vec![
            film("A", 100, "Horror"),
            film("B", 50, "Comedy"),
            film("C", 200, "Horror"),
        ];
        assert_eq!(predict_top_category(&table).unwrap(), "Horror");
    }

    #[test]
    fn ties_break_lexically() {
        let table = vec![
            film("A", 100, "Romance"),
            film("B", 100, "Action"),
            film("C", 100, "Drama"),
        ];
        assert_eq!(predict_top_category(&table).unwrap(), "Action");
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(matches!(predict_top_category(&[]), Err(Error::EmptyInput)));
    }

    proptest! {
        #[test]
        fn prediction_matches_category_views_max(
            rows in proptest::collection::vec((0u64..10_000, 0usize..4), 1..40)
        ) {
            let categories = ["Action", "Comedy", "Drama", "Horror"];
            let table: Vec<FilmRecord> = rows
                .iter()
                .enumerate()
                .map(|(i, (v, c))| film(&format!("F{i}"), *v, categories[*c]))
                .collect();

            let winner = predict_top_category(&table).unwrap();
            let agg = features::category_views(&table);
            let max_views = agg.iter().map(|c| c.total_views).max().unwrap();
            let winner_views = agg
                .iter()
                .find(|c| c.category == winner)
                .map(|c| c.total_views)
                .unwrap();
            prop_assert_eq!(winner_views, max_views);
        }
    }
}
