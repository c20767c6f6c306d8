//! Filmpulse analytics: stateless reducers over the cleaned table.
//!
//! Every function takes a slice of cleaned records and returns a new
//! value; nothing here mutates its input. Aggregations that are
//! undefined on an empty table return [`fp_common::Error::EmptyInput`]
//! instead of NaN.

pub mod features;
pub mod filter;
pub mod model;

#[cfg(test)]
pub(crate) mod test_support;

pub use features::{
    basic_stats, category_views, monthly_views, top_movies, BasicStats, CategoryViews,
    MonthlyViews,
};
pub use filter::{
    distribution, hidden_gems, kpis, leaderboard, FilterSpec, Kpis, LabelColumn, LabelCount,
    SortKey,
};
pub use model::predict_top_category;
