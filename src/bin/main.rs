// SPDX-License-Identifier: GPL-3.0-or-later

use clap::error::ErrorKind;
use lambda_cc::{args, context, discovery, execute, rewrite};
use std::env;
use std::process::ExitCode;

/// Driver function of the application.
fn main() -> ExitCode {
    // Initialize the logging system.
    env_logger::init();
    // Get the package name and version from Cargo
    let pkg_name = env!("CARGO_PKG_NAME");
    let pkg_version = env!("CARGO_PKG_VERSION");
    log::info!("{pkg_name} v{pkg_version}");
    let os = env::consts::OS;
    let family = env::consts::FAMILY;
    let arch = env::consts::ARCH;
    log::info!("Running on... {family}/{os} {arch}");

    // Parse the command line arguments. Any parsing failure maps to
    // exit code 1; help and version requests are not failures.
    let matches = match args::cli().try_get_matches() {
        Ok(matches) => matches,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(matches) {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Rewrite the intercepted compiler invocation and run the result.
///
/// The exit code of the executed command is passed through unchanged,
/// so the build system observes the same outcome as it would from the
/// real compiler.
fn run(matches: clap::ArgMatches) -> anyhow::Result<ExitCode> {
    let arguments = args::Arguments::try_from(matches)?;
    log::info!("{arguments:?}");

    // Capture application context.
    let context = context::Context::capture()?;
    log::info!("{context}");

    let preprocessor = discovery::resolve(&context, arguments.preprocessor.as_deref())?;
    log::info!("Preprocessor: {}", preprocessor.display());

    let command_line = rewrite::rewrite(&preprocessor, &arguments.command)?;
    log::info!("Rewritten command: {command_line}");

    let exit_status = execute::run_shell(&command_line)?;
    log::debug!("Exit code: {exit_status:?}");

    // The exit code is not always available. When the process is killed by a signal,
    // the exit code is not available. In this case, we return the `FAILURE` exit code.
    let exit_code = exit_status
        .code()
        .map(|code| ExitCode::from(code as u8))
        .unwrap_or(ExitCode::FAILURE);

    Ok(exit_code)
}
