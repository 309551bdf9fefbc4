//! Terminal presentation.
//!
//! This module provides:
//! - [`StatusKind`] markers shared by every report line
//! - [`PreflightTheme`] colored and plain styling

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, PreflightTheme};
