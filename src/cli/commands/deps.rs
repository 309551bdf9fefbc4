//! The `opro-preflight deps` command.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::DepsArgs;
use crate::config::PreflightConfig;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Lists the configured dependencies without probing them.
pub struct DepsCommand {
    config: PreflightConfig,
    args: DepsArgs,
}

#[derive(Serialize)]
struct DependencyRow<'a> {
    name: &'a str,
    import: &'a str,
    mode: &'static str,
}

impl DepsCommand {
    /// Create a new deps command.
    pub fn new(config: PreflightConfig, args: DepsArgs) -> Self {
        Self { config, args }
    }

    fn rows(&self) -> Vec<DependencyRow<'_>> {
        self.config
            .dependencies
            .iter()
            .map(|dep| DependencyRow {
                name: &dep.name,
                import: &dep.import,
                mode: if dep.lenient { "lenient" } else { "strict" },
            })
            .collect()
    }
}

impl Command for DepsCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let rows = self.rows();

        if self.args.json {
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| anyhow::anyhow!("Failed to serialize dependencies: {}", e))?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        if rows.is_empty() {
            writeln!(out, "No dependencies configured.")?;
            return Ok(CommandResult::success());
        }

        let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0).max(4);
        let import_width = rows.iter().map(|r| r.import.len()).max().unwrap_or(0).max(6);

        writeln!(
            out,
            "{:<nw$}  {:<iw$}  MODE",
            "NAME",
            "IMPORT",
            nw = name_width,
            iw = import_width
        )?;
        for row in &rows {
            writeln!(
                out,
                "{:<nw$}  {:<iw$}  {}",
                row.name,
                row.import,
                row.mode,
                nw = name_width,
                iw = import_width
            )?;
        }

        Ok(CommandResult::success())
    }
}
