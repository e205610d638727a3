// SPDX-License-Identifier: GPL-3.0-or-later

//! Assembles the final shell command line.

use super::compiler::CompilerSpec;
use super::output::OutputFile;
use super::partition::PartitionedArgs;
use super::source::SourceFile;
use std::path::Path;

/// Compose the preprocessing pipeline.
///
/// The source file is fed through the preprocessor and the result
/// reaches the compiler on standard input, so the compiler gets an
/// explicit `-x <lang>` (the language can no longer be inferred from a
/// file name) and a final `-` as its input.
///
/// One wrinkle: in compile-only mode with no explicit `-o`, the
/// compiler would derive the object name from the input file name, and
/// standard input has none. An explicit `-o <source name>.o` restores
/// the conventional object file name in that case.
pub fn pipeline(
    preprocessor: &Path,
    compiler: &CompilerSpec,
    source: &SourceFile,
    output: &OutputFile,
    parts: &PartitionedArgs,
) -> String {
    let mut words: Vec<&str> = Vec::new();

    let preprocessor = preprocessor.to_string_lossy();
    words.push(&preprocessor);
    words.push(&source.path);
    words.push("|");
    words.push(&compiler.executable);

    let language = format!("-x{}", source.language.flag());
    words.push(&language);

    words.extend(parts.before.iter().map(String::as_str));
    words.extend(parts.after.iter().map(String::as_str));

    let object;
    if parts.compile_only && output.is_defaulted() {
        // FIXME: the .o suffix is a platform convention
        object = format!("-o {}.o", source.file_name());
        words.push(&object);
    }
    words.push("-");

    words.join(" ")
}

/// Compose a direct passthrough invocation.
///
/// With no source file on the command line the compiler is acting as a
/// linker driver; the arguments are forwarded untouched and no
/// preprocessing stage is inserted.
pub fn passthrough(compiler: &CompilerSpec, arguments: &[String]) -> String {
    let mut words: Vec<&str> = vec![&compiler.executable];
    words.extend(arguments.iter().map(String::as_str));
    words.join(" ")
}

/// Escape every double quote with a backslash.
///
/// This is a minimal sanitizer, not full shell escaping: other shell
/// metacharacters pass through and rely on the caller's environment.
pub fn sanitize(command: &str) -> String {
    command.replace('"', "\\\"")
}
