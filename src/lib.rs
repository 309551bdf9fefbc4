//! opro-preflight - Setup verification for OPRO prompt-optimization runs.
//!
//! Before an optimization run spends money on API calls, the preflight
//! confirms the API key is present, makes one cheap completion request,
//! and checks that the Python packages the experiments import are usable.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`connectivity`] - Credential lookup and the API probe
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report rendering and remediation text
//! - [`requirements`] - Python dependency probing
//! - [`runner`] - Preflight orchestration and exit policy
//! - [`ui`] - Terminal styling and status icons
//!
//! # Example
//!
//! ```
//! use opro_preflight::config::{parse_config, Variant};
//! use std::path::Path;
//!
//! let config = parse_config("model: gpt-4o-mini\n", Path::new("preflight.yml")).unwrap();
//! assert_eq!(config.model, "gpt-4o-mini");
//! assert!(!config.variant(Variant::Quick).fail_on_missing_dependencies);
//! ```

pub mod cli;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod report;
pub mod requirements;
pub mod runner;
pub mod ui;

pub use error::{PreflightError, Result};
