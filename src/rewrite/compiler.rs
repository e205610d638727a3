// SPDX-License-Identifier: GPL-3.0-or-later

//! Extracts the real compiler invocation from the leading argument tokens.
//!
//! Build systems sometimes break a quoted compiler string like
//! `CC="lambda-cc 'ccache clang'"` into several argv entries before it
//! reaches this tool. When the first token opens with a quote character,
//! the compiler spec spans the following tokens until one contains the
//! matching quote, and the spanned tokens are joined back into a single
//! command string.
//!
//! Only plain `"` and `'` delimiters are supported; an escaped quote
//! embedded in a token breaks the reconstruction. That is a documented
//! limitation, not something this parser tries to repair.

use thiserror::Error;

/// The resolved compiler command and how many argv entries it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerSpec {
    /// Possibly multi-word command, e.g. `ccache clang`.
    pub executable: String,
    /// Number of leading tokens consumed from the argument list.
    pub consumed: usize,
}

/// States of the reconstruction, driven by the first token.
enum ScanState {
    Unquoted,
    InQuotedSpan(char),
}

impl CompilerSpec {
    /// Parse the compiler spec from the leading tokens of the argument list.
    pub fn parse(tokens: &[String]) -> Result<Self, CompilerSpecError> {
        let first = match tokens.first() {
            Some(token) => token,
            None => return Err(CompilerSpecError::MissingCompiler),
        };

        let state = match first.chars().next() {
            Some(delimiter @ ('"' | '\'')) => ScanState::InQuotedSpan(delimiter),
            _ => ScanState::Unquoted,
        };

        match state {
            ScanState::Unquoted => Ok(CompilerSpec { executable: first.clone(), consumed: 1 }),
            ScanState::InQuotedSpan(delimiter) => Self::parse_quoted(tokens, delimiter),
        }
    }

    /// Join the tokens of a quoted span back into one command string.
    ///
    /// The span closes at the first subsequent token containing the
    /// delimiter; text after the closing quote in that token is dropped.
    fn parse_quoted(tokens: &[String], delimiter: char) -> Result<Self, CompilerSpecError> {
        let closing = tokens
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, token)| token.contains(delimiter))
            .map(|(index, _)| index);

        let end = match closing {
            Some(end) => end,
            None => {
                return Err(CompilerSpecError::UnterminatedQuote {
                    delimiter,
                    head: tokens[0].clone(),
                });
            }
        };

        let mut words = Vec::with_capacity(end + 1);
        words.push(&tokens[0][delimiter.len_utf8()..]);
        for token in &tokens[1..end] {
            words.push(token.as_str());
        }
        let last = &tokens[end];
        let closing_at = last.find(delimiter).expect("closing token contains delimiter");
        words.push(&last[..closing_at]);

        Ok(CompilerSpec { executable: words.join(" "), consumed: end + 1 })
    }
}

/// Errors that can occur while parsing the compiler specification.
#[derive(Error, Debug, PartialEq)]
pub enum CompilerSpecError {
    #[error("Couldn't find a compiler in the argument list")]
    MissingCompiler,
    #[error("Malformed compiler specification: no closing {delimiter} after {head}")]
    UnterminatedQuote { delimiter: char, head: String },
}
