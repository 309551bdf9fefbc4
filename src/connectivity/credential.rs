//! Credential lookup.

use std::env::VarError;

/// Number of leading key characters shown in the report.
pub const KEY_PREVIEW_CHARS: usize = 20;

/// The API credential as read from the environment.
///
/// Read once at the start of a run and never mutated. An empty value is
/// treated the same as an unset variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialState {
    env_var: String,
    value: Option<String>,
}

impl CredentialState {
    /// Read `env_var` from the process environment.
    pub fn read(env_var: &str) -> Self {
        Self::read_with_env(env_var, |key: &str| std::env::var(key))
    }

    /// Read `env_var` with a custom lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn read_with_env<F>(env_var: &str, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let value = env_fn(env_var).ok().filter(|v| !v.is_empty());
        tracing::debug!(
            "Credential {} is {}",
            env_var,
            if value.is_some() { "set" } else { "not set" }
        );
        Self {
            env_var: env_var.to_string(),
            value,
        }
    }

    /// Name of the variable that was read.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Whether a non-empty value was found.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The credential value, if present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The first [`KEY_PREVIEW_CHARS`] characters of the key.
    pub fn preview(&self) -> Option<&str> {
        self.value.as_deref().map(|v| match v.char_indices().nth(KEY_PREVIEW_CHARS) {
            Some((idx, _)) => &v[..idx],
            None => v,
        })
    }
}
