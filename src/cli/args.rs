//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{PreflightConfig, Variant};

/// opro-preflight - Verify an OPRO setup before running experiments.
#[derive(Debug, Parser)]
#[command(name = "opro-preflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .opro/preflight.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the API key, call the API once, then check dependencies (default)
    Check(CheckArgs),

    /// Check dependencies only, without touching the API
    Quick(QuickArgs),

    /// List the configured dependencies
    Deps(DepsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Environment variable holding the API key
    #[arg(long, value_name = "NAME")]
    pub env_var: Option<String>,

    /// Model used for the connectivity probe
    #[arg(short, long)]
    pub model: Option<String>,

    /// API base URL
    #[arg(long, env = "OPENAI_BASE_URL", value_name = "URL")]
    pub api_base: Option<String>,

    /// Python interpreter used to test imports
    #[arg(long, env = "PREFLIGHT_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Exit non-zero when a required dependency is missing
    #[arg(long, value_name = "BOOL")]
    pub fail_on_missing_deps: Option<bool>,
}

impl CheckArgs {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply(&self, config: &mut PreflightConfig) {
        if let Some(env_var) = &self.env_var {
            config.credential_env = env_var.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(python) = &self.python {
            config.python = python.clone();
        }
        if let Some(fail) = self.fail_on_missing_deps {
            config.variant_mut(Variant::Full).fail_on_missing_dependencies = fail;
        }
    }
}

/// Arguments for the `quick` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct QuickArgs {
    /// Python interpreter used to test imports
    #[arg(long, env = "PREFLIGHT_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Exit non-zero when a required dependency is missing
    #[arg(long, value_name = "BOOL")]
    pub fail_on_missing_deps: Option<bool>,
}

impl QuickArgs {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply(&self, config: &mut PreflightConfig) {
        if let Some(python) = &self.python {
            config.python = python.clone();
        }
        if let Some(fail) = self.fail_on_missing_deps {
            config.variant_mut(Variant::Quick).fail_on_missing_dependencies = fail;
        }
    }
}

/// Arguments for the `deps` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DepsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
