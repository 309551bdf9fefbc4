//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use opro_preflight::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("model: gpt-4o-mini", Path::new("preflight.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.model, "gpt-4o-mini");
//! assert_eq!(config.credential_env, "OPENAI_API_KEY");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config};
pub use schema::{
    default_dependencies, DependencySpec, PreflightConfig, Variant, VariantSettings,
    DEFAULT_API_BASE, DEFAULT_CREDENTIAL_ENV, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_PROBE_QUESTION, DEFAULT_PYTHON,
};
pub use validator::{is_module_path, is_package_name, validate, validate_config, ValidationError};
