//! Check result types.
//!
//! Every probe produces one `CheckResult`. Results are immutable once
//! built; the report is assembled from an ordered sequence of them.

/// How a check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The check passed.
    Ok,
    /// The check failed and blocks the run.
    Failed,
    /// The check failed but the run may proceed.
    Warning,
}

/// The result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    name: String,
    severity: Severity,
    detail: String,
}

impl CheckResult {
    /// A passing check.
    pub fn passed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Severity::Ok, detail)
    }

    /// A blocking failure.
    pub fn failed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Severity::Failed, detail)
    }

    /// A non-blocking failure.
    pub fn warning(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, Severity::Warning, detail)
    }

    fn new(name: impl Into<String>, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity,
            detail: detail.into(),
        }
    }

    /// The probed item's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the check passed outright.
    pub fn passed_check(&self) -> bool {
        self.severity == Severity::Ok
    }

    /// Whether this result blocks the run.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Failed
    }

    /// How the check ended.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}
