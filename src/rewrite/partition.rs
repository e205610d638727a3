// SPDX-License-Identifier: GPL-3.0-or-later

//! Splits the compiler flags around the removed `-o <file>` pair.
//!
//! The rewritten compiler invocation keeps all opaque flags, in their
//! original order, on both sides of where the output pair used to be.
//! Order matters: later flags may override earlier ones when the real
//! compiler sees them.

use super::output::OutputFile;
use super::source::SourceFile;

/// Flag that selects compile-only mode (produce an object, skip linking).
const COMPILE_ONLY_FLAG: &str = "-c";

/// The compiler flags split into the groups before and after the `-o`
/// pair, with the source token excluded from both.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedArgs {
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub compile_only: bool,
}

impl PartitionedArgs {
    /// Partition the argument list around the output flag.
    ///
    /// `before` takes every token left of the `-o` (the whole list when
    /// the output is defaulted); `after` takes everything past the output
    /// file name. The source token is dropped from both groups, and the
    /// source file's directory is appended to `after` as an include path
    /// so the stdin-fed compiler can still resolve relative includes.
    pub fn new(arguments: &[String], source: &SourceFile, output: &OutputFile) -> Self {
        let split = match output {
            OutputFile::Explicit { flag_index, .. } => *flag_index,
            OutputFile::Default => arguments.len(),
        };

        let before: Vec<String> = arguments[..split]
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != source.index)
            .map(|(_, argument)| argument.clone())
            .collect();

        let resume = (split + 2).min(arguments.len());
        let mut after: Vec<String> = arguments[resume..]
            .iter()
            .enumerate()
            .filter(|(index, _)| index + resume != source.index)
            .map(|(_, argument)| argument.clone())
            .collect();

        let compile_only = before.iter().chain(after.iter()).any(|a| a == COMPILE_ONLY_FLAG);

        after.push(format!("-I{}", source.directory()));

        PartitionedArgs { before, after, compile_only }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::source::Language;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn partition(args: &[&str]) -> PartitionedArgs {
        let arguments = strings(args);
        let source = SourceFile::locate(&arguments).expect("test input has a source file");
        let output = OutputFile::locate(&arguments);
        PartitionedArgs::new(&arguments, &source, &output)
    }

    #[test]
    fn test_split_around_output_pair() {
        let parts = partition(&["-Wall", "main.c", "-O2", "-o", "out.bin", "-lm"]);

        assert_eq!(parts.before, strings(&["-Wall", "-O2"]));
        assert_eq!(parts.after, strings(&["-lm", "-I."]));
        assert!(!parts.compile_only);

        // Neither group carries the pair that was removed.
        assert!(!parts.before.iter().any(|a| a == "-o" || a == "out.bin"));
        assert!(!parts.after.iter().any(|a| a == "-o" || a == "out.bin"));
    }

    #[test]
    fn test_defaulted_output_puts_everything_before() {
        let parts = partition(&["-Wall", "main.c", "-O2"]);

        assert_eq!(parts.before, strings(&["-Wall", "-O2"]));
        assert_eq!(parts.after, strings(&["-I."]));
    }

    #[test]
    fn test_compile_only_detected_before_split() {
        let parts = partition(&["-c", "main.c", "-o", "main.o"]);
        assert!(parts.compile_only);
    }

    #[test]
    fn test_compile_only_detected_after_split() {
        let parts = partition(&["main.c", "-o", "main.o", "-c"]);
        assert!(parts.compile_only);
        assert_eq!(parts.before, Vec::<String>::new());
        assert_eq!(parts.after, strings(&["-c", "-I."]));
    }

    #[test]
    fn test_source_excluded_after_split() {
        let parts = partition(&["-Wall", "-o", "out", "main.c", "-O2"]);
        assert_eq!(parts.before, strings(&["-Wall"]));
        assert_eq!(parts.after, strings(&["-O2", "-I."]));
    }

    #[test]
    fn test_include_path_uses_source_directory() {
        let parts = partition(&["src/util/main.c", "-o", "main.o"]);
        assert_eq!(parts.after, strings(&["-Isrc/util"]));
    }

    #[test]
    fn test_output_pair_at_end_of_line() {
        let parts = partition(&["-Wall", "main.c", "-o", "out"]);
        assert_eq!(parts.before, strings(&["-Wall"]));
        assert_eq!(parts.after, strings(&["-I."]));
    }
}
