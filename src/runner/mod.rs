//! Preflight execution.
//!
//! - [`preflight`] - Check sequencing and the aggregated report

pub mod preflight;

pub use preflight::{Preflight, PreflightReport};
