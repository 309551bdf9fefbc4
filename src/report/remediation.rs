//! Remediation text for each kind of failure.
//!
//! Message content lives here, apart from the control flow that decides
//! which failures happened, so both can be tested on their own.

/// Kinds of failure a preflight run can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The credential variable is unset or empty. Fatal, no network call.
    CredentialMissing,
    /// The completion request failed. Fatal.
    ApiCallFailed,
    /// A strict dependency could not be imported.
    ModuleLoadFailedStrict,
    /// A lenient dependency could not be imported. Cosmetic.
    ModuleLoadFailedLenient,
}

/// Values substituted into remediation text.
#[derive(Debug, Clone, Default)]
pub struct RemediationContext<'a> {
    /// Credential variable name.
    pub env_var: &'a str,
    /// Python interpreter used for pip commands.
    pub python: &'a str,
    /// Missing strict package names, in probe order.
    pub missing: &'a [&'a str],
}

/// Remediation lines for a failure kind.
///
/// Every kind yields at least one line.
pub fn for_failure(kind: FailureKind, ctx: &RemediationContext<'_>) -> Vec<String> {
    match kind {
        FailureKind::CredentialMissing => vec![
            "Please set it by running:".to_string(),
            format!("  PowerShell: $env:{} = \"your-api-key-here\"", ctx.env_var),
            format!("  CMD: set {}=your-api-key-here", ctx.env_var),
            format!("  bash/zsh: export {}=\"your-api-key-here\"", ctx.env_var),
        ],
        FailureKind::ApiCallFailed => vec![format!(
            "Check that {} holds a valid key with available quota and that the API is reachable.",
            ctx.env_var
        )],
        FailureKind::ModuleLoadFailedStrict => vec![format!("  {}", pip_install(ctx))],
        FailureKind::ModuleLoadFailedLenient => {
            vec!["(This is OK if you're only using OpenAI models)".to_string()]
        }
    }
}

/// The pip command installing exactly the missing strict packages.
pub fn pip_install(ctx: &RemediationContext<'_>) -> String {
    format!("{} -m pip install {}", ctx.python, ctx.missing.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [FailureKind; 4] = [
        FailureKind::CredentialMissing,
        FailureKind::ApiCallFailed,
        FailureKind::ModuleLoadFailedStrict,
        FailureKind::ModuleLoadFailedLenient,
    ];

    fn ctx<'a>(missing: &'a [&'a str]) -> RemediationContext<'a> {
        RemediationContext {
            env_var: "OPENAI_API_KEY",
            python: "python3",
            missing,
        }
    }

    #[test]
    fn every_kind_has_remediation() {
        for kind in ALL_KINDS {
            assert!(!for_failure(kind, &ctx(&["numpy"])).is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn credential_remediation_covers_each_shell() {
        let lines = for_failure(FailureKind::CredentialMissing, &ctx(&[])).join("\n");
        assert!(lines.contains("$env:OPENAI_API_KEY = \"your-api-key-here\""));
        assert!(lines.contains("set OPENAI_API_KEY=your-api-key-here"));
        assert!(lines.contains("export OPENAI_API_KEY="));
    }

    #[test]
    fn strict_remediation_lists_exactly_missing_packages() {
        let lines = for_failure(FailureKind::ModuleLoadFailedStrict, &ctx(&["numpy", "pandas"]));
        assert_eq!(lines, vec!["  python3 -m pip install numpy pandas"]);
    }

    #[test]
    fn pip_install_uses_configured_interpreter() {
        let context = RemediationContext {
            env_var: "OPENAI_API_KEY",
            python: "py -3.11",
            missing: &["absl-py"],
        };
        assert_eq!(pip_install(&context), "py -3.11 -m pip install absl-py");
    }

    #[test]
    fn lenient_remediation_says_it_is_tolerable() {
        let lines = for_failure(FailureKind::ModuleLoadFailedLenient, &ctx(&[]));
        assert!(lines[0].contains("This is OK"));
    }
}
