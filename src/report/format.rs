//! Report rendering.
//!
//! Sections always appear in the same order: credential, API
//! connectivity, dependencies, closing block. Sections for checks that
//! did not run are left out.

use crate::config::{PreflightConfig, Variant};
use crate::connectivity::{ApiProbeOutcome, ConnectivityOutcome, CredentialState};
use crate::report::remediation::{for_failure, FailureKind, RemediationContext};
use crate::requirements::{CheckResult, DependencyReport, Severity};
use crate::runner::PreflightReport;
use crate::ui::{PreflightTheme, StatusKind};

/// Width of the `=` separator around the closing banner.
pub const SEPARATOR_WIDTH: usize = 60;

/// Longest echoed API response before truncation.
pub const RESPONSE_PREVIEW_CHARS: usize = 100;

/// Render a full report.
pub fn format_report(
    report: &PreflightReport,
    config: &PreflightConfig,
    theme: &PreflightTheme,
) -> String {
    let mut lines = Vec::new();

    if let Some(credential) = &report.credential {
        lines.extend(format_credential(credential, theme));
    }

    if let Some(ConnectivityOutcome::Probed(outcome)) = &report.connectivity {
        lines.push(String::new());
        lines.extend(format_connectivity(outcome, &config.credential_env, theme));
    }

    if let Some(deps) = &report.dependencies {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(format_dependencies(deps, &config.python, theme));
        lines.push(String::new());
        match report.variant {
            Variant::Full => lines.extend(format_closing(report.is_success(), config, theme)),
            Variant::Quick => lines.extend(format_quick_closing(&config.credential_env)),
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Credential line, with remediation when the variable is missing.
pub fn format_credential(credential: &CredentialState, theme: &PreflightTheme) -> Vec<String> {
    match credential.preview() {
        Some(preview) => vec![
            StatusKind::Success.format(theme, &format!("{} is set", credential.env_var())),
            format!("  Key starts with: {}...", preview),
        ],
        None => {
            let mut lines = vec![
                StatusKind::Failed.format(
                    theme,
                    &format!(
                        "ERROR: {} environment variable is not set!",
                        credential.env_var()
                    ),
                ),
                String::new(),
            ];
            let ctx = RemediationContext {
                env_var: credential.env_var(),
                ..Default::default()
            };
            lines.extend(for_failure(FailureKind::CredentialMissing, &ctx));
            lines
        }
    }
}

/// API connectivity lines.
pub fn format_connectivity(
    outcome: &ApiProbeOutcome,
    env_var: &str,
    theme: &PreflightTheme,
) -> Vec<String> {
    let mut lines = vec![StatusKind::Running.format(theme, "Testing OpenAI API connection...")];
    match outcome {
        ApiProbeOutcome::Succeeded { response_text } => {
            lines.push(StatusKind::Success.format(theme, "OpenAI API connection successful!"));
            lines.push(format!(
                "  Test response: {}",
                truncate(response_text, RESPONSE_PREVIEW_CHARS)
            ));
        }
        ApiProbeOutcome::Failed { error } => {
            lines.push(StatusKind::Failed.format(
                theme,
                &format!("Error connecting to OpenAI API: {}", error),
            ));
            let ctx = RemediationContext {
                env_var,
                ..Default::default()
            };
            lines.extend(
                for_failure(FailureKind::ApiCallFailed, &ctx)
                    .into_iter()
                    .map(|line| format!("  {}", theme.dim.apply_to(line))),
            );
        }
    }
    lines
}

/// Per-dependency lines followed by the summary.
pub fn format_dependencies(
    deps: &DependencyReport,
    python: &str,
    theme: &PreflightTheme,
) -> Vec<String> {
    let mut lines = vec![StatusKind::Running.format(theme, "Checking dependencies...")];
    for result in deps.results() {
        lines.extend(format_dependency_line(result, theme));
    }
    lines.push(String::new());

    if deps.all_satisfied() {
        lines.push(StatusKind::AllGood.format(theme, "All required dependencies are installed!"));
    } else {
        let missing = deps.missing_strict();
        let ctx = RemediationContext {
            python,
            missing: &missing,
            ..Default::default()
        };
        lines.push(StatusKind::Warning.format(
            theme,
            "Some dependencies are missing. Install them with:",
        ));
        lines.extend(for_failure(FailureKind::ModuleLoadFailedStrict, &ctx));
    }
    lines
}

fn format_dependency_line(result: &CheckResult, theme: &PreflightTheme) -> Vec<String> {
    let marker = StatusKind::from(result.severity());
    match result.severity() {
        Severity::Ok => vec![format!("  {}", marker.format(theme, result.name()))],
        Severity::Failed => vec![format!(
            "  {}",
            marker.format(theme, &format!("{} - {}", result.name(), result.detail()))
        )],
        Severity::Warning => {
            let mut lines = vec![format!(
                "  {}",
                marker.format(theme, &format!("{} - {}", result.name(), result.detail()))
            )];
            lines.extend(
                for_failure(FailureKind::ModuleLoadFailedLenient, &Default::default())
                    .into_iter()
                    .map(|line| format!("      {}", theme.dim.apply_to(line))),
            );
            lines
        }
    }
}

/// Closing banner and example commands for the full run.
pub fn format_closing(
    success: bool,
    config: &PreflightConfig,
    theme: &PreflightTheme,
) -> Vec<String> {
    let separator = theme.border.apply_to("=".repeat(SEPARATOR_WIDTH)).to_string();
    let (title, lead) = if success {
        (
            StatusKind::Celebrate.format(theme, "Setup verification complete!"),
            "You can now run OPRO examples:",
        )
    } else {
        (
            StatusKind::Failed.format(theme, "Setup verification found problems"),
            "Once the problems above are fixed, you can run OPRO examples:",
        )
    };

    let mut lines = vec![
        separator.clone(),
        theme.highlight.apply_to(title).to_string(),
        separator,
        String::new(),
        lead.to_string(),
    ];

    let placeholder = credential_placeholder(&config.credential_env);
    for (idx, example) in EXAMPLES.iter().enumerate() {
        lines.push(String::new());
        lines.extend(example.render(idx + 1, &config.model, &placeholder));
    }

    lines.push(String::new());
    lines.push(StatusKind::Warning.format(
        theme,
        "Note: API calls may incur costs. Start with small tests!",
    ));
    lines
}

/// Closing hint for the quick run.
pub fn format_quick_closing(env_var: &str) -> Vec<String> {
    vec![
        "To test the OpenAI API connection, set your API key and run:".to_string(),
        format!("  {}", full_check_command(env_var)),
    ]
}

/// How the credential is referenced in example commands.
pub fn credential_placeholder(env_var: &str) -> String {
    if cfg!(windows) {
        format!("%{}%", env_var)
    } else {
        format!("${}", env_var)
    }
}

fn full_check_command(env_var: &str) -> String {
    if cfg!(windows) {
        format!("$env:{} = \"your-key\"; opro-preflight check", env_var)
    } else {
        format!("{}=\"your-key\" opro-preflight check", env_var)
    }
}

/// Cut `text` to at most `max` characters, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Value of one example command flag.
enum ArgValue {
    Literal(&'static str),
    Model,
    Credential,
}

/// A downstream OPRO invocation shown in the closing block.
struct ExampleCommand {
    title: &'static str,
    script: &'static str,
    args: &'static [(&'static str, ArgValue)],
}

impl ExampleCommand {
    fn render(&self, number: usize, model: &str, credential: &str) -> Vec<String> {
        let title = self.title.replace("{model}", model);
        let mut lines = vec![
            format!("{}. {}:", number, title),
            format!("   python {} \\", self.script),
        ];
        for (i, (flag, value)) in self.args.iter().enumerate() {
            let value = match value {
                ArgValue::Literal(v) => *v,
                ArgValue::Model => model,
                ArgValue::Credential => credential,
            };
            let continuation = if i + 1 < self.args.len() { " \\" } else { "" };
            lines.push(format!("     --{}=\"{}\"{}", flag, value, continuation));
        }
        lines
    }
}

const EXAMPLES: &[ExampleCommand] = &[
    ExampleCommand {
        title: "Prompt Optimization (GSM8K dataset with {model})",
        script: "opro/optimization/optimize_instructions.py",
        args: &[
            ("optimizer", ArgValue::Model),
            ("scorer", ArgValue::Model),
            ("instruction_pos", ArgValue::Literal("Q_begin")),
            ("dataset", ArgValue::Literal("gsm8k")),
            ("task", ArgValue::Literal("train")),
            ("openai_api_key", ArgValue::Credential),
        ],
    },
    ExampleCommand {
        title: "Prompt Evaluation",
        script: "opro/evaluation/evaluate_instructions.py",
        args: &[
            ("scorer", ArgValue::Model),
            ("dataset", ArgValue::Literal("gsm8k")),
            ("task", ArgValue::Literal("test")),
            ("instruction_pos", ArgValue::Literal("Q_begin")),
            ("openai_api_key", ArgValue::Credential),
        ],
    },
    ExampleCommand {
        title: "Linear Regression Example",
        script: "opro/optimization/optimize_linear_regression.py",
        args: &[
            ("optimizer", ArgValue::Model),
            ("openai_api_key", ArgValue::Credential),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::CheckResult;
    use std::env::VarError;

    fn theme() -> PreflightTheme {
        PreflightTheme::plain()
    }

    fn credential(value: Option<&'static str>) -> CredentialState {
        CredentialState::read_with_env("OPENAI_API_KEY", move |_: &str| {
            value.map(String::from).ok_or(VarError::NotPresent)
        })
    }

    fn deps(results: Vec<CheckResult>) -> DependencyReport {
        DependencyReport::new(results)
    }

    fn full_report(
        key: Option<&'static str>,
        api: Option<ApiProbeOutcome>,
        dependencies: Option<DependencyReport>,
    ) -> PreflightReport {
        let connectivity = match api {
            Some(outcome) => ConnectivityOutcome::Probed(outcome),
            None => ConnectivityOutcome::CredentialMissing,
        };
        PreflightReport {
            variant: Variant::Full,
            credential: Some(credential(key)),
            connectivity: Some(connectivity),
            dependencies,
            fail_on_missing_dependencies: true,
        }
    }

    fn all_installed() -> DependencyReport {
        deps(vec![
            CheckResult::passed("numpy", "installed"),
            CheckResult::passed("pandas", "installed"),
        ])
    }

    #[test]
    fn missing_credential_report_has_remediation_only() {
        let report = full_report(None, None, None);
        let text = format_report(&report, &PreflightConfig::default(), &theme());

        assert!(text.contains("OPENAI_API_KEY environment variable is not set"));
        assert!(text.contains("Please set it by running:"));
        assert!(!text.contains("Testing OpenAI API connection"));
        assert!(!text.contains("Checking dependencies"));
    }

    #[test]
    fn successful_report_echoes_response() {
        let report = full_report(
            Some("sk-test123"),
            Some(ApiProbeOutcome::Succeeded {
                response_text: "No".to_string(),
            }),
            Some(all_installed()),
        );
        let text = format_report(&report, &PreflightConfig::default(), &theme());

        assert!(text.contains("✓ OPENAI_API_KEY is set"));
        assert!(text.contains("  Key starts with: sk-test123..."));
        assert!(text.contains("Test response: No"));
        assert!(text.contains("✅ All required dependencies are installed!"));
        assert!(text.contains("🎉 Setup verification complete!"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let report = full_report(
            Some("sk-test123"),
            Some(ApiProbeOutcome::Succeeded {
                response_text: "No".to_string(),
            }),
            Some(all_installed()),
        );
        let text = format_report(&report, &PreflightConfig::default(), &theme());

        let positions: Vec<usize> = [
            "is set",
            "Testing OpenAI API connection",
            "Checking dependencies",
            "  ✓ numpy",
            "All required dependencies",
            "====",
            "1. Prompt Optimization",
            "2. Prompt Evaluation",
            "3. Linear Regression Example",
            "Note: API calls may incur costs",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", text);
    }

    #[test]
    fn api_failure_echoes_error_verbatim() {
        let report = full_report(
            Some("sk-test123"),
            Some(ApiProbeOutcome::Failed {
                error: "HTTP 401: Incorrect API key provided".to_string(),
            }),
            Some(all_installed()),
        );
        let text = format_report(&report, &PreflightConfig::default(), &theme());

        assert!(text
            .contains("❌ Error connecting to OpenAI API: HTTP 401: Incorrect API key provided"));
        assert!(text.contains("Setup verification found problems"));
        assert!(text.contains("Checking dependencies"));
    }

    #[test]
    fn long_responses_are_truncated() {
        let long = "x".repeat(RESPONSE_PREVIEW_CHARS + 50);
        let lines = format_connectivity(
            &ApiProbeOutcome::Succeeded {
                response_text: long,
            },
            "OPENAI_API_KEY",
            &theme(),
        );
        let expected = format!("  Test response: {}...", "x".repeat(RESPONSE_PREVIEW_CHARS));
        assert_eq!(lines[2], expected);
    }

    #[test]
    fn dependency_lines_use_mode_markers() {
        let report = deps(vec![
            CheckResult::passed("absl-py", "installed"),
            CheckResult::failed("numpy", "not installed"),
            CheckResult::warning("google-generativeai", "installed but has compatibility issues"),
        ]);
        let lines = format_dependencies(&report, "python3", &theme());

        assert_eq!(lines[1], "  ✓ absl-py");
        assert_eq!(lines[2], "  ❌ numpy - not installed");
        assert_eq!(
            lines[3],
            "  ⚠️  google-generativeai - installed but has compatibility issues"
        );
        assert_eq!(lines[4], "      (This is OK if you're only using OpenAI models)");
    }

    #[test]
    fn missing_strict_summary_names_install_command() {
        let report = deps(vec![
            CheckResult::failed("numpy", "not installed"),
            CheckResult::passed("openai", "installed"),
            CheckResult::failed("pandas", "not installed"),
            CheckResult::warning("google-generativeai", "not installed"),
        ]);
        let text = format_dependencies(&report, "python3", &theme()).join("\n");

        assert!(text.contains("Some dependencies are missing. Install them with:"));
        assert!(text.ends_with("  python3 -m pip install numpy pandas"));
        assert!(!text.contains("install numpy pandas google-generativeai"));
    }

    #[test]
    fn lenient_only_failure_prints_success_summary() {
        let report = deps(vec![
            CheckResult::passed("numpy", "installed"),
            CheckResult::warning("google-generativeai", "not installed"),
        ]);
        let text = format_dependencies(&report, "python3", &theme()).join("\n");

        assert!(text.contains("All required dependencies are installed!"));
        assert!(!text.contains("pip install"));
    }

    #[test]
    fn examples_substitute_model_and_placeholder() {
        let config = PreflightConfig {
            model: "gpt-4o-mini".to_string(),
            ..Default::default()
        };
        let text = format_closing(true, &config, &theme()).join("\n");
        let placeholder = credential_placeholder("OPENAI_API_KEY");

        assert!(text.contains("1. Prompt Optimization (GSM8K dataset with gpt-4o-mini):"));
        assert!(text.contains("     --optimizer=\"gpt-4o-mini\" \\"));
        assert!(text.contains(&format!("     --openai_api_key=\"{}\"", placeholder)));
        assert!(!text.contains("{model}"));
    }

    #[test]
    fn closing_banner_is_fixed_width() {
        let lines = format_closing(true, &PreflightConfig::default(), &theme());
        assert_eq!(lines[0], "=".repeat(SEPARATOR_WIDTH));
        assert_eq!(lines[2], "=".repeat(SEPARATOR_WIDTH));
    }

    #[test]
    fn last_flag_has_no_continuation() {
        let lines = EXAMPLES[2].render(3, "gpt-3.5-turbo", "$OPENAI_API_KEY");
        assert_eq!(
            lines,
            vec![
                "3. Linear Regression Example:",
                "   python opro/optimization/optimize_linear_regression.py \\",
                "     --optimizer=\"gpt-3.5-turbo\" \\",
                "     --openai_api_key=\"$OPENAI_API_KEY\"",
            ]
        );
    }

    #[test]
    fn quick_report_closes_with_full_check_hint() {
        let report = PreflightReport {
            variant: Variant::Quick,
            credential: None,
            connectivity: None,
            dependencies: Some(all_installed()),
            fail_on_missing_dependencies: false,
        };
        let text = format_report(&report, &PreflightConfig::default(), &theme());

        assert!(text.starts_with("🔄 Checking dependencies..."));
        assert!(text.contains("To test the OpenAI API connection"));
        assert!(text.contains("opro-preflight check"));
        assert!(!text.contains("===="));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé...");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("", 5), "");
    }
}
