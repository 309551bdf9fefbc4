//! Configuration validation rules.
//!
//! - The credential variable name must be a non-empty env-var name
//! - The Python interpreter must be named
//! - Every dependency needs a pip-style name and a dotted-identifier import
//! - Dependency names must be unique
//! - The probe request must ask for at least one token

use crate::config::schema::PreflightConfig;
use crate::error::{PreflightError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &PreflightConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.credential_env.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-credential-env",
            "credential_env must not be empty",
        ));
    } else if config.credential_env.contains('=') {
        errors.push(ValidationError::new(
            "invalid-credential-env",
            format!(
                "credential_env '{}' is not a valid variable name",
                config.credential_env
            ),
        ));
    }

    if config.model.trim().is_empty() {
        errors.push(ValidationError::new("empty-model", "model must not be empty"));
    }

    if config.max_tokens == 0 {
        errors.push(ValidationError::new(
            "zero-max-tokens",
            "max_tokens must be at least 1",
        ));
    }

    if config.python.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-python",
            "python must name an interpreter",
        ));
    }

    errors.extend(validate_dependencies(config));
    errors
}

fn validate_dependencies(config: &PreflightConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for dep in &config.dependencies {
        if dep.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-dependency-name",
                format!("Dependency importing '{}' has no name", dep.import),
            ));
            continue;
        }
        if !is_package_name(&dep.name) {
            errors.push(ValidationError::new(
                "invalid-dependency-name",
                format!(
                    "Dependency name '{}' is not a valid package name",
                    dep.name
                ),
            ));
            continue;
        }
        if !seen.insert(dep.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-dependency",
                format!("Dependency '{}' is listed more than once", dep.name),
            ));
        }
        if !is_module_path(&dep.import) {
            errors.push(ValidationError::new(
                "invalid-import",
                format!(
                    "Dependency '{}' has invalid import name '{}'",
                    dep.name, dep.import
                ),
            ));
        }
    }

    errors
}

/// Whether `name` is a dotted sequence of Python identifiers.
pub fn is_module_path(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) if c == '_' || c.is_ascii_alphabetic() => {
                    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
                }
                _ => false,
            }
        })
}

/// Whether `name` is a valid pip project name.
///
/// ASCII letters and digits, with `.`, `-` or `_` allowed in between.
pub fn is_package_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
        }
        _ => false,
    }
}

/// Validate and return the first error as a `PreflightError`.
pub fn validate(config: &PreflightConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(PreflightError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DependencySpec;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&PreflightConfig::default()).is_ok());
    }

    #[test]
    fn empty_credential_env_rejected() {
        let config = PreflightConfig {
            credential_env: "  ".to_string(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-credential-env");
    }

    #[test]
    fn credential_env_with_equals_rejected() {
        let config = PreflightConfig {
            credential_env: "KEY=value".to_string(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "invalid-credential-env");
    }

    #[test]
    fn zero_max_tokens_rejected() {
        let config = PreflightConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(validate_config(&config)
            .iter()
            .any(|e| e.rule == "zero-max-tokens"));
    }

    #[test]
    fn duplicate_dependency_rejected() {
        let config = PreflightConfig {
            dependencies: vec![
                DependencySpec::strict("numpy", "numpy"),
                DependencySpec::lenient("numpy", "numpy"),
            ],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-dependency");
    }

    #[test]
    fn injection_in_import_rejected() {
        let config = PreflightConfig {
            dependencies: vec![DependencySpec::strict("evil", "os; os.system('x')")],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("invalid import name"));
    }

    #[test]
    fn shell_text_in_dependency_name_rejected() {
        let config = PreflightConfig {
            dependencies: vec![DependencySpec::strict("numpy; rm -rf ~", "numpy")],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-dependency-name");
        assert!(validate(&config)
            .unwrap_err()
            .to_string()
            .contains("'numpy; rm -rf ~' is not a valid package name"));
    }

    #[test]
    fn empty_python_rejected() {
        let config = PreflightConfig {
            python: " ".to_string(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-python");
    }

    #[test]
    fn package_name_accepts_pip_names() {
        assert!(is_package_name("absl-py"));
        assert!(is_package_name("google-generativeai"));
        assert!(is_package_name("zope.interface"));
        assert!(is_package_name("typing_extensions"));
        assert!(is_package_name("h5py"));
    }

    #[test]
    fn package_name_rejects_shell_and_specifiers() {
        assert!(!is_package_name(""));
        assert!(!is_package_name("-numpy"));
        assert!(!is_package_name("numpy."));
        assert!(!is_package_name("numpy pandas"));
        assert!(!is_package_name("numpy>=1.0"));
        assert!(!is_package_name("numpy;rm"));
        assert!(!is_package_name("$(whoami)"));
    }

    #[test]
    fn errors_are_collected_not_short_circuited() {
        let config = PreflightConfig {
            credential_env: String::new(),
            model: String::new(),
            dependencies: vec![DependencySpec::strict("", "numpy")],
            ..Default::default()
        };
        assert_eq!(validate_config(&config).len(), 3);
    }

    #[test]
    fn module_path_accepts_dotted_identifiers() {
        assert!(is_module_path("numpy"));
        assert!(is_module_path("google.generativeai"));
        assert!(is_module_path("_private.mod_2"));
    }

    #[test]
    fn module_path_rejects_malformed_names() {
        assert!(!is_module_path(""));
        assert!(!is_module_path("google."));
        assert!(!is_module_path(".numpy"));
        assert!(!is_module_path("2fast"));
        assert!(!is_module_path("absl-py"));
        assert!(!is_module_path("a b"));
    }
}
