// SPDX-License-Identifier: GPL-3.0-or-later

use crate::environment;
use crate::environment::KEY_OS__PATH;
use anyhow::{Context as AnyhowContext, Result};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Application context containing runtime environment information.
///
/// Captured once at startup, before any validation, so the later phases
/// (preprocessor discovery, command rewriting) can stay free of global
/// state and remain testable.
#[derive(Debug, Clone)]
pub struct Context {
    /// Current working directory when the tool was invoked
    pub current_directory: PathBuf,
    /// All environment variables at startup
    pub environment: HashMap<String, String>,
}

impl Context {
    /// Capture the current application context.
    pub fn capture() -> Result<Self> {
        let current_directory =
            env::current_dir().with_context(|| "Failed to get current working directory")?;

        let environment = env::vars().collect::<HashMap<String, String>>();

        Ok(Context { current_directory, environment })
    }

    /// Returns the PATH environment variable value.
    ///
    /// The lookup is case insensitive, which is relevant on Windows where
    /// the variable is not always capitalized.
    pub fn path(&self) -> Option<String> {
        self.environment
            .iter()
            .find(|(key, _)| key.to_uppercase() == KEY_OS__PATH)
            .map(|(_, value)| value.clone())
    }

    /// Parses the PATH environment variable into a vector of directories.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.path().map(|path| std::env::split_paths(&path).collect()).unwrap_or_default()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Application Context:")?;
        writeln!(f, "Current Directory: {}", self.current_directory.display())?;
        writeln!(f, "Relevant Environment Variables:")?;
        for (key, value) in &self.environment {
            if environment::relevant_env(key) {
                writeln!(f, "  {}={}", key, value)?;
            }
        }

        Ok(())
    }
}
