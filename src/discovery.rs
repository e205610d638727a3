// SPDX-License-Identifier: GPL-3.0-or-later

//! Locates the `lambda-pp` executable.
//!
//! The resolution order is: explicit command line override, the
//! `LAMBDA_PP` environment variable, then a search of the `PATH`
//! directories. The overrides are trusted as given, only the `PATH`
//! search verifies that the candidate is an executable file.

use crate::context::Context;
use crate::environment::KEY_PREPROCESSOR;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the preprocessor executable to search for.
pub const PREPROCESSOR_NAME: &str = "lambda-pp";

/// Directories searched when no `PATH` variable is present.
const FALLBACK_PATHS: &[&str] = &[".", "/bin", "/usr/bin"];

/// Resolve the preprocessor executable path.
///
/// The `override_path` comes from the `--lambda-pp` flag and wins over
/// everything else.
pub fn resolve(
    context: &Context,
    override_path: Option<&Path>,
) -> Result<PathBuf, DiscoveryError> {
    if let Some(path) = override_path {
        log::debug!("Preprocessor from command line: {}", path.display());
        return Ok(path.to_path_buf());
    }

    if let Some(path) = context.environment.get(KEY_PREPROCESSOR) {
        log::debug!("Preprocessor from {KEY_PREPROCESSOR}: {path}");
        return Ok(PathBuf::from(path));
    }

    let search_path = context.path().unwrap_or_else(fallback_path);
    which::which_in(PREPROCESSOR_NAME, Some(&search_path), &context.current_directory)
        .map_err(|_| DiscoveryError::ToolNotFound { search_path })
}

fn fallback_path() -> String {
    let joined = std::env::join_paths(FALLBACK_PATHS.iter().map(PathBuf::from))
        .expect("fallback entries contain no separator");
    joined.to_string_lossy().into_owned()
}

/// Errors that can occur while locating the preprocessor.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Couldn't find {PREPROCESSOR_NAME} on the search path '{search_path}'")]
    ToolNotFound { search_path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn context_with(vars: &[(&str, &str)]) -> Context {
        Context {
            current_directory: PathBuf::from("/project"),
            environment: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_command_line_override_wins() {
        let context = context_with(&[(KEY_PREPROCESSOR, "/from/env/lambda-pp")]);
        let override_path = PathBuf::from("/from/flag/lambda-pp");

        let result = resolve(&context, Some(&override_path)).unwrap();
        assert_eq!(result, override_path);
    }

    #[test]
    fn test_environment_override() {
        let context = context_with(&[(KEY_PREPROCESSOR, "/from/env/lambda-pp")]);

        let result = resolve(&context, None).unwrap();
        assert_eq!(result, PathBuf::from("/from/env/lambda-pp"));
    }

    #[test]
    #[cfg(target_family = "unix")]
    fn test_path_search_finds_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(PREPROCESSOR_NAME);
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let context = Context {
            current_directory: dir.path().to_path_buf(),
            environment: HashMap::from([(
                "PATH".to_string(),
                dir.path().to_string_lossy().into_owned(),
            )]),
        };

        let result = resolve(&context, None).unwrap();
        assert_eq!(result, exe);
    }

    #[test]
    fn test_tool_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let context = Context {
            current_directory: dir.path().to_path_buf(),
            environment: HashMap::from([(
                "PATH".to_string(),
                dir.path().to_string_lossy().into_owned(),
            )]),
        };

        let result = resolve(&context, None);
        assert!(matches!(result, Err(DiscoveryError::ToolNotFound { .. })));
    }
}
