//! The `opro-preflight check` command.

use std::io::Write;

use crate::cli::args::CheckArgs;
use crate::config::{validate, PreflightConfig};
use crate::connectivity::OpenAiClient;
use crate::error::Result;
use crate::report::format_report;
use crate::requirements::PythonModuleLoader;
use crate::runner::Preflight;
use crate::ui::PreflightTheme;

use super::dispatcher::{Command, CommandResult};

/// The full preflight: credential, one API call, dependency sweep.
pub struct CheckCommand {
    config: PreflightConfig,
    args: CheckArgs,
    theme: PreflightTheme,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: PreflightConfig, args: CheckArgs, theme: PreflightTheme) -> Self {
        Self {
            config,
            args,
            theme,
        }
    }

    /// Configuration after command-line overrides.
    pub fn effective_config(&self) -> Result<PreflightConfig> {
        let mut config = self.config.clone();
        self.args.apply(&mut config);
        validate(&config)?;
        Ok(config)
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = self.effective_config()?;
        tracing::debug!(
            model = %config.model,
            api_base = %config.api_base,
            python = %config.python,
            "Running full preflight"
        );

        let client = OpenAiClient::new(&config.api_base)
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        let loader = PythonModuleLoader::new(&config.python);
        let report = Preflight::new(&config, &loader).run_full(&client);

        write!(out, "{}", format_report(&report, &config, &self.theme))?;
        out.flush()?;

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}
