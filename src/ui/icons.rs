//! Status markers used in the report.
//!
//! `StatusKind` is the single vocabulary for line prefixes, so every
//! section of the report marks results the same way.

use super::theme::PreflightTheme;
use crate::requirements::Severity;

/// Canonical status kinds used across the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Check is about to run.
    Running,
    /// A whole group of checks passed.
    AllGood,
    /// The run finished cleanly.
    Celebrate,
}

impl StatusKind {
    /// Unicode marker.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "❌",
            Self::Warning => "⚠️ ",
            Self::Running => "🔄",
            Self::AllGood => "✅",
            Self::Celebrate => "🎉",
        }
    }

    /// Styled marker using the given theme.
    pub fn styled(self, theme: &PreflightTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success | Self::AllGood | Self::Celebrate => {
                theme.success.apply_to(icon).to_string()
            }
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Running => theme.info.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled marker + message.
    pub fn format(self, theme: &PreflightTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<Severity> for StatusKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok => Self::Success,
            Severity::Failed => Self::Failed,
            Severity::Warning => Self::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_markers() {
        assert_eq!(StatusKind::from(Severity::Ok).icon(), "✓");
        assert_eq!(StatusKind::from(Severity::Failed).icon(), "❌");
        assert!(StatusKind::from(Severity::Warning).icon().starts_with('⚠'));
    }

    #[test]
    fn format_prefixes_marker() {
        let theme = PreflightTheme::plain();
        assert_eq!(StatusKind::Success.format(&theme, "numpy"), "✓ numpy");
        assert_eq!(
            StatusKind::Failed.format(&theme, "pandas - not installed"),
            "❌ pandas - not installed"
        );
    }

    #[test]
    fn warning_marker_keeps_its_padding() {
        let theme = PreflightTheme::plain();
        assert_eq!(
            StatusKind::Warning.format(&theme, "google-generativeai"),
            "⚠️  google-generativeai"
        );
    }
}
