//! Configuration schema definitions.
//!
//! These structs map to the optional `preflight.yml` file. Every field has
//! a default, so an empty file (or no file at all) yields the stock OPRO
//! preflight.

use serde::{Deserialize, Serialize};

/// Default name of the credential environment variable.
pub const DEFAULT_CREDENTIAL_ENV: &str = "OPENAI_API_KEY";

/// Default chat-completion model used for the connectivity probe.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base URL (the `/chat/completions` path is appended).
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Fixed probe question. The answer is echoed, never checked.
pub const DEFAULT_PROBE_QUESTION: &str =
    "Does the sun rise from the north? Just answer yes or no.";

/// Output cap for the probe request.
pub const DEFAULT_MAX_TOKENS: u32 = 10;

/// Interpreter used to attempt imports.
pub const DEFAULT_PYTHON: &str = "python3";

/// Root configuration structure for preflight.yml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreflightConfig {
    /// Environment variable holding the API key
    pub credential_env: String,

    /// Model identifier sent with the probe request
    pub model: String,

    /// API base URL
    pub api_base: String,

    /// Question sent as the single user message
    pub probe_question: String,

    /// Output token cap for the probe request
    pub max_tokens: u32,

    /// Python interpreter used by the dependency prober
    pub python: String,

    /// Dependencies to probe, in report order
    pub dependencies: Vec<DependencySpec>,

    /// Settings for the full check
    pub full: VariantSettings,

    /// Settings for the quick check
    pub quick: VariantSettings,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            probe_question: DEFAULT_PROBE_QUESTION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            python: DEFAULT_PYTHON.to_string(),
            dependencies: default_dependencies(),
            full: VariantSettings {
                fail_on_missing_dependencies: true,
            },
            quick: VariantSettings {
                fail_on_missing_dependencies: false,
            },
        }
    }
}

impl PreflightConfig {
    /// Settings for the given variant.
    pub fn variant(&self, variant: Variant) -> &VariantSettings {
        match variant {
            Variant::Full => &self.full,
            Variant::Quick => &self.quick,
        }
    }

    /// Mutable settings for the given variant.
    pub fn variant_mut(&mut self, variant: Variant) -> &mut VariantSettings {
        match variant {
            Variant::Full => &mut self.full,
            Variant::Quick => &mut self.quick,
        }
    }
}

/// A library to probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencySpec {
    /// Package name as installed (used in pip commands and the report)
    pub name: String,

    /// Module name passed to `import`
    pub import: String,

    /// Whether a failure is only a warning
    #[serde(default, skip_serializing_if = "is_false")]
    pub lenient: bool,
}

impl DependencySpec {
    /// A dependency whose absence blocks the run.
    pub fn strict(name: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import: import.into(),
            lenient: false,
        }
    }

    /// A dependency whose absence is only reported as a warning.
    pub fn lenient(name: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import: import.into(),
            lenient: true,
        }
    }
}

/// Per-variant behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VariantSettings {
    /// Exit non-zero when a strict dependency is missing
    pub fail_on_missing_dependencies: bool,
}

/// Which flavour of preflight to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Credential, API call and dependency sweep.
    Full,
    /// Dependency sweep only.
    Quick,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// The stock OPRO dependency list.
///
/// google-generativeai is lenient: it is only needed for PaLM models and
/// fails to import on some interpreter versions.
pub fn default_dependencies() -> Vec<DependencySpec> {
    vec![
        DependencySpec::strict("absl-py", "absl"),
        DependencySpec::strict("immutabledict", "immutabledict"),
        DependencySpec::strict("openai", "openai"),
        DependencySpec::strict("numpy", "numpy"),
        DependencySpec::strict("pandas", "pandas"),
        DependencySpec::lenient("google-generativeai", "google.generativeai"),
    ]
}
