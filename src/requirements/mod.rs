//! Dependency probing.
//!
//! This module checks whether the Python libraries the toolkit needs can
//! be imported, and folds the per-library results into a single verdict.
//!
//! # Modules
//!
//! - [`loader`] - Module loading through a Python interpreter
//! - [`prober`] - Ordered sweep over dependency specs
//! - [`status`] - Check result types

pub mod loader;
pub mod prober;
pub mod status;

pub use loader::{classify_import_error, LoadOutcome, ModuleLoader, PythonModuleLoader};
pub use prober::{all_satisfied, probe_dependencies, DependencyProber, DependencyReport};
pub use status::{CheckResult, Severity};
