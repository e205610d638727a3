// SPDX-License-Identifier: GPL-3.0-or-later

//! Names of the environment variables the application reads or reports.

/// Explicit preprocessor location, overrides the `PATH` search.
pub const KEY_PREPROCESSOR: &str = "LAMBDA_PP";

// man page for `exec` (Linux system call)
pub const KEY_OS__PATH: &str = "PATH";

// https://www.gnu.org/software/make/manual/html_node/Implicit-Variables.html
pub const KEY_MAKE__C_COMPILER: &str = "CC";
pub const KEY_MAKE__CXX_COMPILER: &str = "CXX";
pub const KEY_MAKE__C_FLAGS: &str = "CFLAGS";
pub const KEY_MAKE__CXX_FLAGS: &str = "CXXFLAGS";

/// Environment variables worth showing in the startup log.
pub fn relevant_env(key: &str) -> bool {
    matches!(
        key,
        KEY_PREPROCESSOR
            | KEY_MAKE__C_COMPILER
            | KEY_MAKE__CXX_COMPILER
            | KEY_MAKE__C_FLAGS
            | KEY_MAKE__CXX_FLAGS
    )
        // Windows PATH variable is case sensitive and not always capitalized
        || key.to_uppercase() == KEY_OS__PATH
}
