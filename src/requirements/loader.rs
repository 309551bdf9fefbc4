//! Module loading for the dependency prober.
//!
//! A library is "importable" when the configured Python interpreter can
//! run `import <module>` and exit cleanly. The check is a child process,
//! so a broken library can never take the prober down with it.
//!
//! # Example
//!
//! ```no_run
//! use opro_preflight::requirements::{LoadOutcome, ModuleLoader, PythonModuleLoader};
//!
//! let loader = PythonModuleLoader::new("python3");
//! match loader.load("numpy") {
//!     LoadOutcome::Loaded => println!("numpy is importable"),
//!     other => println!("numpy: {:?}", other),
//! }
//! ```

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::is_module_path;

/// Outcome of one import attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The module imported cleanly.
    Loaded,
    /// The module (or one of its own imports) is not installed.
    NotInstalled {
        /// Last line of the interpreter's error output.
        message: String,
    },
    /// The module is present but raised while importing, or the
    /// interpreter could not be run at all.
    Broken {
        /// What went wrong.
        message: String,
    },
}

impl LoadOutcome {
    /// Whether the module imported cleanly.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}

/// Attempts to load a module by its import name.
///
/// This trait allows substituting the interpreter in tests.
pub trait ModuleLoader {
    /// Try to import `import_name`.
    fn load(&self, import_name: &str) -> LoadOutcome;
}

/// Loads modules by spawning a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonModuleLoader {
    interpreter: String,
    program: String,
    args: Vec<String>,
}

impl PythonModuleLoader {
    /// Create a loader that runs `interpreter -c "import <module>"`.
    ///
    /// `interpreter` is a program optionally followed by whitespace-separated
    /// arguments, such as `py -3.11` or `python3 -I`. An existing file path
    /// is taken whole, even when it contains spaces.
    pub fn new(interpreter: impl Into<String>) -> Self {
        let interpreter = interpreter.into();
        let trimmed = interpreter.trim();

        let (program, args) = if Path::new(trimmed).is_file() {
            (trimmed.to_string(), Vec::new())
        } else {
            let mut parts = trimmed.split_whitespace().map(String::from);
            let program = parts.next().unwrap_or_default();
            (program, parts.collect())
        };

        Self {
            interpreter,
            program,
            args,
        }
    }
}

impl ModuleLoader for PythonModuleLoader {
    fn load(&self, import_name: &str) -> LoadOutcome {
        if !is_module_path(import_name) {
            return LoadOutcome::Broken {
                message: format!("'{}' is not a valid module name", import_name),
            };
        }

        tracing::debug!("Importing {} with {}", import_name, self.interpreter);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("-c")
            .arg(format!("import {}", import_name))
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => LoadOutcome::Loaded,
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                let outcome = classify_import_error(&stderr, out.status.code());
                tracing::debug!("Import of {} failed: {:?}", import_name, outcome);
                outcome
            }
            Err(e) => LoadOutcome::Broken {
                message: format!("failed to run {}: {}", self.interpreter, e),
            },
        }
    }
}

/// Classify a failed import from the interpreter's stderr.
///
/// Python prints the exception as the last line of the traceback, so
/// that line decides between "not installed" and "broken".
pub fn classify_import_error(stderr: &str, code: Option<i32>) -> LoadOutcome {
    let last_line = stderr
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty());

    match last_line {
        Some(line) if line.starts_with("ModuleNotFoundError") || line.starts_with("ImportError") => {
            LoadOutcome::NotInstalled {
                message: line.to_string(),
            }
        }
        Some(line) => LoadOutcome::Broken {
            message: line.to_string(),
        },
        None => LoadOutcome::Broken {
            message: match code {
                Some(code) => format!("interpreter exited with code {}", code),
                None => "interpreter was terminated by a signal".to_string(),
            },
        },
    }
}
