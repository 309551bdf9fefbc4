//! Connectivity verifier.
//!
//! Checks the credential first and only then issues exactly one
//! completion request. Nothing is retried.

use std::env::VarError;

use crate::config::PreflightConfig;
use crate::connectivity::client::{ChatRequest, CompletionClient};
use crate::connectivity::credential::CredentialState;

/// Outcome of the single API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiProbeOutcome {
    /// The call returned a response with at least one choice.
    Succeeded {
        /// First choice's content, trimmed.
        response_text: String,
    },
    /// The call failed for any reason.
    Failed {
        /// The failure message, verbatim.
        error: String,
    },
}

impl ApiProbeOutcome {
    /// Whether the call succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// The echoed response text on success.
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Self::Succeeded { response_text } => Some(response_text),
            Self::Failed { .. } => None,
        }
    }

    /// The error message on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Succeeded { .. } => None,
        }
    }
}

/// What the connectivity verifier concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityOutcome {
    /// The credential was absent; no request was made.
    CredentialMissing,
    /// The request was made.
    Probed(ApiProbeOutcome),
}

impl ConnectivityOutcome {
    /// Whether the credential was present and the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Probed(outcome) if outcome.succeeded())
    }

    /// The API outcome, if a call was made.
    pub fn api_outcome(&self) -> Option<&ApiProbeOutcome> {
        match self {
            Self::Probed(outcome) => Some(outcome),
            Self::CredentialMissing => None,
        }
    }
}

/// Verifies that the remote completion API is reachable.
pub struct ConnectivityVerifier<'a> {
    client: &'a dyn CompletionClient,
    model: String,
    question: String,
    max_tokens: u32,
}

impl<'a> ConnectivityVerifier<'a> {
    /// Create a verifier from configuration.
    pub fn from_config(client: &'a dyn CompletionClient, config: &PreflightConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            question: config.probe_question.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// The request this verifier sends.
    pub fn request(&self) -> ChatRequest {
        ChatRequest::single_turn(&self.model, &self.question, self.max_tokens)
    }

    /// Run the check against an already-read credential.
    pub fn verify(&self, credential: &CredentialState) -> ConnectivityOutcome {
        let Some(api_key) = credential.value() else {
            tracing::debug!(
                "Skipping API call: {} is not set",
                credential.env_var()
            );
            return ConnectivityOutcome::CredentialMissing;
        };

        let outcome = match self.client.complete(api_key, &self.request()) {
            Ok(text) => ApiProbeOutcome::Succeeded {
                response_text: text.trim().to_string(),
            },
            Err(e) => {
                tracing::debug!("Completion request failed: {}", e);
                ApiProbeOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        ConnectivityOutcome::Probed(outcome)
    }
}

/// Read the configured credential from the process environment and, if
/// set, send one probe request.
pub fn verify_connectivity(
    config: &PreflightConfig,
    client: &dyn CompletionClient,
) -> (CredentialState, ConnectivityOutcome) {
    let credential = CredentialState::read(&config.credential_env);
    verify_credential(credential, config, client)
}

/// [`verify_connectivity`] with a custom environment lookup.
pub fn verify_connectivity_with_env<F>(
    config: &PreflightConfig,
    client: &dyn CompletionClient,
    env_fn: F,
) -> (CredentialState, ConnectivityOutcome)
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let credential = CredentialState::read_with_env(&config.credential_env, env_fn);
    verify_credential(credential, config, client)
}

fn verify_credential(
    credential: CredentialState,
    config: &PreflightConfig,
    client: &dyn CompletionClient,
) -> (CredentialState, ConnectivityOutcome) {
    let outcome = ConnectivityVerifier::from_config(client, config).verify(&credential);
    (credential, outcome)
}
