// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns an intercepted compiler invocation into the shell command to run.
//!
//! The main abstractions are:
//! - `CompilerSpec`: the real compiler command pulled from the leading
//!   argv tokens, possibly reassembled from a quoted multi-word string.
//! - `SourceFile` / `OutputFile`: the translation unit and the `-o`
//!   pair located among the opaque compiler flags.
//! - `PartitionedArgs`: the remaining flags, split around the removed
//!   output pair.
//! - `compose`: assembly of the final pipeline (or passthrough) string.

pub mod compiler;
pub mod compose;
pub mod output;
pub mod partition;
pub mod source;

use self::compiler::{CompilerSpec, CompilerSpecError};
use self::output::OutputFile;
use self::partition::PartitionedArgs;
use self::source::SourceFile;
use std::path::Path;
use thiserror::Error;

/// Rewrite a compiler invocation into a shell command line.
///
/// When the argument list carries no recognizable source file the
/// invocation is a link step: it is forwarded unchanged. Otherwise the
/// result is a pipeline running the source through the preprocessor and
/// feeding the compiler on standard input.
pub fn rewrite(preprocessor: &Path, command: &[String]) -> Result<String, RewriteError> {
    let spec = CompilerSpec::parse(command)?;
    let arguments = &command[spec.consumed..];
    if arguments.is_empty() {
        return Err(RewriteError::MissingArguments);
    }

    let source = match SourceFile::locate(arguments) {
        None => {
            log::debug!("No source file found, forwarding as a link invocation");
            return Ok(compose::passthrough(&spec, arguments));
        }
        Some(source) => source,
    };
    log::debug!("Source file: {} ({})", source.path, source.language.flag());

    let output = OutputFile::locate(arguments);
    log::debug!("Output file: {} (defaulted: {})", output.path(), output.is_defaulted());

    let parts = PartitionedArgs::new(arguments, &source, &output);
    let pipeline = compose::pipeline(preprocessor, &spec, &source, &output, &parts);

    Ok(compose::sanitize(&pipeline))
}

/// Errors that can occur while rewriting the invocation.
#[derive(Error, Debug, PartialEq)]
pub enum RewriteError {
    #[error(transparent)]
    CompilerSpec(#[from] CompilerSpecError),
    #[error("Expected compiler options after the compiler name")]
    MissingArguments,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn command(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn rewrite_with_default_pp(args: &[&str]) -> Result<String, RewriteError> {
        rewrite(&PathBuf::from("lambda-pp"), &command(args))
    }

    #[test]
    fn test_compile_is_rewritten_to_a_pipeline() {
        let result = rewrite_with_default_pp(&["clang", "-Wall", "foo.cpp", "-O2", "-o", "foo"]);
        assert_eq!(result.unwrap(), "lambda-pp foo.cpp | clang -xc++ -Wall -O2 -I. -");
    }

    #[test]
    fn test_link_invocation_passes_through() {
        let result = rewrite_with_default_pp(&["clang", "main.o", "util.o", "-o", "app"]);
        assert_eq!(result.unwrap(), "clang main.o util.o -o app");
    }

    #[test]
    fn test_quoted_compiler_spec() {
        let result = rewrite_with_default_pp(&["\"ccache", "clang\"", "main.c"]);
        assert_eq!(result.unwrap(), "lambda-pp main.c | ccache clang -xc -I. -");
    }

    #[test]
    fn test_unterminated_compiler_spec_fails() {
        let result = rewrite_with_default_pp(&["\"ccache", "clang", "main.c"]);
        assert!(matches!(result, Err(RewriteError::CompilerSpec(_))));
    }

    #[test]
    fn test_compiler_without_arguments_fails() {
        let result = rewrite_with_default_pp(&["clang"]);
        assert_eq!(result, Err(RewriteError::MissingArguments));
    }

    #[test]
    fn test_define_with_quotes_is_sanitized() {
        let result = rewrite_with_default_pp(&["cc", "-DGREETING=\"hi\"", "main.c"]);
        assert_eq!(result.unwrap(), "lambda-pp main.c | cc -xc -DGREETING=\\\"hi\\\" -I. -");
    }
}
