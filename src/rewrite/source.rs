// SPDX-License-Identifier: GPL-3.0-or-later

//! Finds the translation unit on the command line.
//!
//! The source file is recognized purely by its file name extension. The
//! first token (left to right) carrying a recognized extension wins; the
//! extension also decides whether the compiler runs in C or C++ mode.
//! Build systems driving a compiler pass exactly one source file per
//! invocation, so no attempt is made to rank multiple candidates.

/// Language variant of the translation unit, derived from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cxx,
}

impl Language {
    /// Argument of the compiler's `-x` flag.
    pub fn flag(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cxx => "c++",
        }
    }
}

/// Recognized extensions, C group first. The order within the table is
/// fixed, but for a given token the winning extension must match at the
/// very end of the token, so the groups cannot shadow each other.
const EXTENSIONS: &[(&str, Language)] = &[
    (".c", Language::C),
    (".C", Language::C),
    (".cc", Language::Cxx),
    (".cx", Language::Cxx),
    (".cxx", Language::Cxx),
    (".cpp", Language::Cxx),
    (".CC", Language::Cxx),
    (".CX", Language::Cxx),
    (".CXX", Language::Cxx),
    (".CPP", Language::Cxx),
];

/// Identifies which argument slot holds the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// The token, verbatim, usually a relative path.
    pub path: String,
    /// Index of the token in the post-compiler-spec argument list.
    pub index: usize,
    pub language: Language,
}

impl SourceFile {
    /// Scan the argument list for the first token ending in a recognized
    /// extension. Returns `None` when no token matches, which the caller
    /// treats as a link (passthrough) invocation.
    pub fn locate(arguments: &[String]) -> Option<Self> {
        arguments.iter().enumerate().find_map(|(index, argument)| {
            EXTENSIONS.iter().find_map(|(extension, language)| {
                argument.ends_with(extension).then(|| SourceFile {
                    path: argument.clone(),
                    index,
                    language: *language,
                })
            })
        })
    }

    /// Directory component of the source path, `.` when there is none.
    ///
    /// The preprocessed text reaches the compiler on standard input with
    /// no path of its own, so this directory is handed to the compiler as
    /// an include path to keep relative includes working.
    pub fn directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(0) => "/",
            Some(position) => &self.path[..position],
            None => ".",
        }
    }

    /// File name component of the source path.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(position) => &self.path[position + 1..],
            None => &self.path,
        }
    }
}
