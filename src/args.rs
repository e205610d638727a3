// SPDX-License-Identifier: GPL-3.0-or-later

//! This module contains the command line interface of the application.
//!
//! The command line parsing is implemented using the `clap` library.
//! The module is defining types to represent a structured form of the
//! program invocation. The `Arguments` type is used to represent all
//! possible invocations of the program.

use anyhow::anyhow;
use clap::{arg, command, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Represents the command line arguments of the application.
#[derive(Debug, PartialEq)]
pub struct Arguments {
    // Explicit preprocessor location, bypasses the discovery.
    pub preprocessor: Option<PathBuf>,
    // The compiler invocation with all its flags, verbatim.
    pub command: Vec<String>,
}

impl TryFrom<ArgMatches> for Arguments {
    type Error = anyhow::Error;

    fn try_from(matches: ArgMatches) -> Result<Self, Self::Error> {
        let preprocessor = matches.get_one::<String>("lambda-pp").map(PathBuf::from);

        let command: Vec<String> = matches
            .get_many::<String>("COMMAND")
            .ok_or_else(|| anyhow!("missing compiler invocation"))?
            .cloned()
            .collect();

        Ok(Arguments { preprocessor, command })
    }
}

/// Represents the command line interface of the application.
///
/// The compiler invocation is captured as a trailing variable argument
/// list, so the compiler's own flags (which all start with a hyphen)
/// are passed through without being interpreted here. Only the leading
/// `--lambda-pp` flag belongs to this tool.
pub fn cli() -> Command {
    command!().arg_required_else_help(true).args(&[
        arg!(--"lambda-pp" <PATH> "Path of the lambda-pp executable"),
        arg!(<COMMAND> "Compiler invocation to rewrite")
            .action(ArgAction::Append)
            .num_args(1..)
            .trailing_var_arg(true)
            .allow_hyphen_values(true)
            .required(true),
    ])
}
