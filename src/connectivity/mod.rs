//! Credential and API connectivity checks.
//!
//! # Modules
//!
//! - [`credential`] - Reading the API key from the environment
//! - [`client`] - Chat-completion client trait and OpenAI implementation
//! - [`verifier`] - Fail-fast credential check followed by one API call

pub mod client;
pub mod credential;
pub mod verifier;

pub use client::{
    extract_first_choice, ApiError, ChatMessage, ChatRequest, CompletionClient, OpenAiClient,
};
pub use credential::{CredentialState, KEY_PREVIEW_CHARS};
pub use verifier::{
    verify_connectivity, verify_connectivity_with_env, ApiProbeOutcome, ConnectivityOutcome,
    ConnectivityVerifier,
};
