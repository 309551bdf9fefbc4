//! Preflight orchestration.
//!
//! The full run is a strict sequence: read the credential, stop if it is
//! missing, call the API once, then sweep every dependency whatever the
//! API said. The quick run is the dependency sweep alone.

use std::env::VarError;

use crate::config::{PreflightConfig, Variant};
use crate::connectivity::{
    verify_connectivity, verify_connectivity_with_env, CompletionClient, ConnectivityOutcome,
    CredentialState,
};
use crate::report::FailureKind;
use crate::requirements::{DependencyProber, DependencyReport, ModuleLoader};

/// Everything one run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightReport {
    /// Which checks were run.
    pub variant: Variant,
    /// Credential state (full variant only).
    pub credential: Option<CredentialState>,
    /// Connectivity outcome (full variant only).
    pub connectivity: Option<ConnectivityOutcome>,
    /// Dependency sweep; absent when the run stopped at the credential.
    pub dependencies: Option<DependencyReport>,
    /// Whether missing strict dependencies fail the run.
    pub fail_on_missing_dependencies: bool,
}

impl PreflightReport {
    /// Failures observed, in report order.
    pub fn failures(&self) -> Vec<FailureKind> {
        let mut failures = Vec::new();

        match &self.connectivity {
            Some(ConnectivityOutcome::CredentialMissing) => {
                failures.push(FailureKind::CredentialMissing)
            }
            Some(ConnectivityOutcome::Probed(outcome)) if !outcome.succeeded() => {
                failures.push(FailureKind::ApiCallFailed)
            }
            _ => {}
        }

        if let Some(deps) = &self.dependencies {
            if !deps.all_satisfied() {
                failures.push(FailureKind::ModuleLoadFailedStrict);
            }
            if deps.warnings().next().is_some() {
                failures.push(FailureKind::ModuleLoadFailedLenient);
            }
        }

        failures
    }

    /// Whether the run ends in `EXIT_SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.failures().iter().all(|kind| match kind {
            FailureKind::CredentialMissing | FailureKind::ApiCallFailed => false,
            FailureKind::ModuleLoadFailedStrict => !self.fail_on_missing_dependencies,
            FailureKind::ModuleLoadFailedLenient => true,
        })
    }

    /// Process exit code: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Runs the preflight sequence against an injected module loader.
///
/// Only the full run talks to the API, so the completion client is passed
/// to it directly.
pub struct Preflight<'a> {
    config: &'a PreflightConfig,
    loader: &'a dyn ModuleLoader,
}

impl<'a> Preflight<'a> {
    /// Create a runner.
    pub fn new(config: &'a PreflightConfig, loader: &'a dyn ModuleLoader) -> Self {
        Self { config, loader }
    }

    /// Full run against the process environment.
    pub fn run_full(&self, client: &dyn CompletionClient) -> PreflightReport {
        let (credential, connectivity) = verify_connectivity(self.config, client);
        self.finish_full(credential, connectivity)
    }

    /// Full run with a custom environment lookup.
    pub fn run_full_with_env<F>(
        &self,
        client: &dyn CompletionClient,
        env_fn: F,
    ) -> PreflightReport
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let (credential, connectivity) =
            verify_connectivity_with_env(self.config, client, env_fn);
        self.finish_full(credential, connectivity)
    }

    fn finish_full(
        &self,
        credential: CredentialState,
        connectivity: ConnectivityOutcome,
    ) -> PreflightReport {
        let dependencies = match connectivity {
            ConnectivityOutcome::CredentialMissing => None,
            ConnectivityOutcome::Probed(_) => Some(self.sweep()),
        };

        PreflightReport {
            variant: Variant::Full,
            credential: Some(credential),
            connectivity: Some(connectivity),
            dependencies,
            fail_on_missing_dependencies: self
                .config
                .variant(Variant::Full)
                .fail_on_missing_dependencies,
        }
    }

    /// Dependency sweep only.
    pub fn run_quick(&self) -> PreflightReport {
        PreflightReport {
            variant: Variant::Quick,
            credential: None,
            connectivity: None,
            dependencies: Some(self.sweep()),
            fail_on_missing_dependencies: self
                .config
                .variant(Variant::Quick)
                .fail_on_missing_dependencies,
        }
    }

    fn sweep(&self) -> DependencyReport {
        tracing::debug!(
            "Probing {} dependencies",
            self.config.dependencies.len()
        );
        DependencyProber::new(self.loader).probe(&self.config.dependencies)
    }
}
