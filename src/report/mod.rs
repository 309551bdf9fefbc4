//! Human-readable preflight report.
//!
//! - [`format`] - Renders a [`crate::runner::PreflightReport`] to text
//! - [`remediation`] - Failure kinds and the advice attached to each
//!
//! # Example
//!
//! ```
//! use opro_preflight::report::{for_failure, FailureKind, RemediationContext};
//!
//! let ctx = RemediationContext {
//!     env_var: "OPENAI_API_KEY",
//!     python: "python3",
//!     missing: &["numpy", "pandas"],
//! };
//! let lines = for_failure(FailureKind::ModuleLoadFailedStrict, &ctx);
//! assert_eq!(lines, vec!["  python3 -m pip install numpy pandas"]);
//! ```

pub mod format;
pub mod remediation;

pub use format::{
    credential_placeholder, format_closing, format_connectivity, format_credential,
    format_dependencies, format_quick_closing, format_report, truncate,
    RESPONSE_PREVIEW_CHARS, SEPARATOR_WIDTH,
};
pub use remediation::{for_failure, pip_install, FailureKind, RemediationContext};
