//! Dependency prober.
//!
//! The `DependencyProber` attempts every configured import in order and
//! never stops at the first failure. Strict dependencies that fail are
//! blocking; lenient ones only produce warnings.

use crate::config::DependencySpec;
use crate::requirements::loader::{LoadOutcome, ModuleLoader};
use crate::requirements::status::CheckResult;

/// Result of sweeping all dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    results: Vec<CheckResult>,
}

impl DependencyReport {
    /// Wrap an ordered sequence of results.
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// Results in probe order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Whether every strict dependency loaded.
    pub fn all_satisfied(&self) -> bool {
        all_satisfied(&self.results)
    }

    /// Names of strict dependencies that failed, in probe order.
    pub fn missing_strict(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.is_blocking())
            .map(CheckResult::name)
            .collect()
    }

    /// Results that only produced warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(|r| !r.passed_check() && !r.is_blocking())
    }
}

/// Fold a result sequence into the "all strict dependencies present" flag.
pub fn all_satisfied(results: &[CheckResult]) -> bool {
    results.iter().fold(true, |ok, r| ok && !r.is_blocking())
}

/// Sweeps a list of dependency specs through a module loader.
pub struct DependencyProber<'a> {
    loader: &'a dyn ModuleLoader,
}

impl<'a> DependencyProber<'a> {
    /// Create a prober backed by the given loader.
    pub fn new(loader: &'a dyn ModuleLoader) -> Self {
        Self { loader }
    }

    /// Probe every spec, in order.
    pub fn probe(&self, specs: &[DependencySpec]) -> DependencyReport {
        DependencyReport::new(specs.iter().map(|spec| self.probe_one(spec)).collect())
    }

    /// Probe a single spec.
    pub fn probe_one(&self, spec: &DependencySpec) -> CheckResult {
        let outcome = self.loader.load(&spec.import);
        to_check_result(spec, &outcome)
    }
}

/// Probe `specs` with `loader` and return the ordered results.
pub fn probe_dependencies(specs: &[DependencySpec], loader: &dyn ModuleLoader) -> Vec<CheckResult> {
    DependencyProber::new(loader).probe(specs).results
}

fn to_check_result(spec: &DependencySpec, outcome: &LoadOutcome) -> CheckResult {
    match (outcome, spec.lenient) {
        (LoadOutcome::Loaded, _) => CheckResult::passed(&spec.name, "installed"),
        (LoadOutcome::NotInstalled { message }, false) => {
            tracing::debug!("{} is not importable: {}", spec.name, message);
            CheckResult::failed(&spec.name, "not installed")
        }
        (LoadOutcome::Broken { message }, false) => {
            tracing::debug!("{} failed to import: {}", spec.name, message);
            CheckResult::failed(&spec.name, format!("failed to import: {}", message))
        }
        (LoadOutcome::NotInstalled { message }, true) => {
            tracing::debug!("Lenient dependency {} is not importable: {}", spec.name, message);
            CheckResult::warning(&spec.name, "not installed")
        }
        (LoadOutcome::Broken { message }, true) => {
            tracing::debug!("Lenient dependency {} failed to import: {}", spec.name, message);
            CheckResult::warning(&spec.name, "installed but has compatibility issues")
        }
    }
}
