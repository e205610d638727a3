// SPDX-License-Identifier: GPL-3.0-or-later

//! Finds the explicit `-o <file>` pair on the command line.

/// Default output name used when no `-o` is present.
pub const DEFAULT_OUTPUT: &str = "a.out";

/// Identifies the output file of the compilation.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFile {
    /// An explicit `-o <file>` pair; `flag_index` is the position of the
    /// `-o` token, the file name occupies the following slot.
    Explicit { path: String, flag_index: usize },
    /// No `-o` on the command line, the compiler defaults to `a.out`.
    Default,
}

impl OutputFile {
    /// Scan the argument list for the first token exactly equal to `-o`.
    ///
    /// A trailing `-o` with no file name after it is treated the same as
    /// an absent one.
    pub fn locate(arguments: &[String]) -> Self {
        match arguments.iter().position(|argument| argument == "-o") {
            Some(flag_index) if flag_index + 1 < arguments.len() => OutputFile::Explicit {
                path: arguments[flag_index + 1].clone(),
                flag_index,
            },
            _ => OutputFile::Default,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            OutputFile::Explicit { path, .. } => path,
            OutputFile::Default => DEFAULT_OUTPUT,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, OutputFile::Default)
    }
}
