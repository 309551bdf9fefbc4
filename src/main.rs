//! opro-preflight CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use opro_preflight::cli::{Cli, CommandDispatcher};
use opro_preflight::ui::{PreflightTheme, StatusKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("opro_preflight=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("opro_preflight=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("opro-preflight starting with args: {:?}", cli);

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let theme = PreflightTheme::detect(cli.no_color);
    let dispatcher = CommandDispatcher::new(project_root, theme.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let _ = out.flush();
            eprintln!(
                "{}",
                StatusKind::Failed.format(&theme, &format!("Error: {}", e))
            );
            ExitCode::from(1)
        }
    }
}
