//! The `opro-preflight quick` command.

use std::io::Write;

use crate::cli::args::QuickArgs;
use crate::config::{validate, PreflightConfig};
use crate::error::Result;
use crate::report::format_report;
use crate::requirements::PythonModuleLoader;
use crate::runner::Preflight;
use crate::ui::PreflightTheme;

use super::dispatcher::{Command, CommandResult};

/// Dependency sweep without credential or network checks.
pub struct QuickCommand {
    config: PreflightConfig,
    args: QuickArgs,
    theme: PreflightTheme,
}

impl QuickCommand {
    /// Create a new quick command.
    pub fn new(config: PreflightConfig, args: QuickArgs, theme: PreflightTheme) -> Self {
        Self {
            config,
            args,
            theme,
        }
    }
}

impl Command for QuickCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut config = self.config.clone();
        self.args.apply(&mut config);
        validate(&config)?;
        tracing::debug!(python = %config.python, "Running quick dependency check");

        let loader = PythonModuleLoader::new(&config.python);
        let report = Preflight::new(&config, &loader).run_quick();

        write!(out, "{}", format_report(&report, &config, &self.theme))?;
        out.flush()?;

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn run(python: &str, fail_on_missing: Option<bool>) -> (CommandResult, String) {
        let args = QuickArgs {
            python: Some(python.to_string()),
            fail_on_missing_deps: fail_on_missing,
        };
        let cmd = QuickCommand::new(PreflightConfig::default(), args, PreflightTheme::plain());
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quick_passes_when_everything_imports() {
        let (result, text) = run("true", None);
        assert!(result.success);
        assert!(text.contains("All required dependencies are installed"));
        assert!(!text.contains("Testing OpenAI API connection"));
    }

    #[test]
    fn quick_tolerates_missing_dependencies_by_default() {
        let (result, text) = run("false", None);
        assert!(result.success);
        assert!(text.contains("Some dependencies are missing"));
    }

    #[test]
    fn quick_can_be_made_strict() {
        let (result, _) = run("false", Some(true));
        assert_eq!(result.exit_code, 1);
    }
}
