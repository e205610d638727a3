// SPDX-License-Identifier: GPL-3.0-or-later

//! Runs the composed shell command and reports its exit status.

use std::process::{Command, ExitStatus};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time;
use thiserror::Error;

/// Run the composed command line through the shell.
///
/// The exit status of the shell (which is the exit status of the last
/// stage of the pipeline) is returned verbatim; compiler diagnostics go
/// straight to the inherited stderr.
pub fn run_shell(command_line: &str) -> Result<ExitStatus, ExecuteError> {
    log::debug!("Executing: sh -c '{command_line}'");
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    supervise(&mut command)
}

/// This method supervises the execution of a command.
///
/// It starts the command and waits for its completion. It also forwards
/// signals to the child process. The method returns the exit status of
/// the child process.
fn supervise(command: &mut Command) -> Result<ExitStatus, ExecuteError> {
    let signaled = Arc::new(AtomicUsize::new(0));
    for signal in signal_hook::consts::TERM_SIGNALS {
        signal_hook::flag::register_usize(*signal, Arc::clone(&signaled), *signal as usize)
            .map_err(ExecuteError::SignalRegistration)?;
    }

    let mut child = command.spawn().map_err(ExecuteError::ProcessSpawn)?;

    loop {
        // Forward signals to the child process, but don't exit the loop while it is running
        if signaled.swap(0usize, Ordering::SeqCst) != 0 {
            log::debug!("Received signal, forwarding to child process");
            child.kill().map_err(ExecuteError::ProcessKill)?;
        }

        // Check if the child process has exited
        match child.try_wait() {
            Ok(Some(exit_status)) => {
                log::debug!("Child process exited: {exit_status:?}");
                return Ok(exit_status);
            }
            Ok(None) => {
                thread::sleep(time::Duration::from_millis(100));
            }
            Err(err) => {
                log::error!("Error waiting for child process: {err}");
                return Err(ExecuteError::ProcessWait(err));
            }
        }
    }
}

/// Errors that can occur during process supervision.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Failed to register signal handler: {0}")]
    SignalRegistration(#[source] std::io::Error),
    #[error("Failed to execute the shell: {0}")]
    ProcessSpawn(#[source] std::io::Error),
    #[error("Failed to kill process: {0}")]
    ProcessKill(#[source] std::io::Error),
    #[error("Failed to wait for process: {0}")]
    ProcessWait(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command() {
        let status = run_shell("true").unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_failing_command_status_is_surfaced() {
        let status = run_shell("exit 3").unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_pipeline_status_is_the_last_stage() {
        let status = run_shell("false | true").unwrap();
        assert!(status.success());
    }
}
