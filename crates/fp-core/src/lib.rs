//! Filmpulse CLI support: logging, exit codes, and rendering.
//!
//! The binary in `main.rs` wires these together; everything with
//! behavior worth testing lives here.

pub mod exit_codes;
pub mod logging;
pub mod render;

pub use exit_codes::ExitCode;
