/*!
   Running external commands, either to completion with captured output,
   or as supervised long-lived child processes.
*/

use eyre::eyre;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::str;
use std::thread;
use tokio::sync::oneshot;
use tracing::{debug, info, trace, warn};

use crate::error::{handle_exec_error, handle_generic_error, Error};
use crate::types::process::{ProcessCompletion, ProcessExit, ProcessHandle, SupervisedProcess};

#[derive(Debug)]
pub struct ExecOutput {
    /// Captured stdout, with trailing whitespace removed.
    pub stdout: String,
    pub stderr: String,
}

/**
   The seam between the bootstrap logic and the operating system's
   process primitives.

   Every invocation may mutate the shared keyring and genesis file of
   the node. Callers must issue invocations that touch the same keyring
   or genesis file strictly one after another.
*/
pub trait CommandRunner {
    /**
       Run `program` to completion, optionally feeding `stdin`, and
       return its captured output. A non-zero exit status results in
       [`ExternalCommandFailed`](crate::error::ErrorDetail::ExternalCommandFailed).
    */
    fn exec(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<ExecOutput, Error>;

    /**
       Spawn `program` with its stdio attached to the current terminal and
       return without waiting for it to exit.
    */
    fn spawn(&self, program: &str, args: &[&str]) -> Result<SupervisedProcess, Error>;
}

impl<Runner: CommandRunner + ?Sized> CommandRunner for &Runner {
    fn exec(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<ExecOutput, Error> {
        (**self).exec(program, args, stdin)
    }

    fn spawn(&self, program: &str, args: &[&str]) -> Result<SupervisedProcess, Error> {
        (**self).spawn(program, args)
    }
}

/**
   The [`CommandRunner`] that spawns real operating system processes.

   [`spawn`](CommandRunner::spawn) must be called from within a Tokio
   runtime, as the child process is awaited on a runtime task.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn exec(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<ExecOutput, Error> {
        simple_exec_with_input(program, args, stdin)
    }

    fn spawn(&self, program: &str, args: &[&str]) -> Result<SupervisedProcess, Error> {
        spawn_supervised(program, args)
    }
}

pub fn simple_exec(program: &str, args: &[&str]) -> Result<ExecOutput, Error> {
    simple_exec_with_input(program, args, None)
}

pub fn simple_exec_with_input(
    program: &str,
    args: &[&str],
    input: Option<&str>,
) -> Result<ExecOutput, Error> {
    debug!("Executing command: {} {}", program, itertools::join(args, " "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(handle_exec_error(program))?;

    // Feed stdin from its own thread so that a child filling its output
    // pipes before reading all of its input cannot block on us.
    let writer = match (input, child.stdin.take()) {
        (Some(input), Some(mut stdin)) => {
            let input = input.to_string();
            Some(thread::spawn(move || stdin.write_all(input.as_bytes())))
        }
        _ => None,
    };

    let output = child
        .wait_with_output()
        .map_err(handle_exec_error(program))?;

    if let Some(writer) = writer {
        match writer.join() {
            Ok(Ok(())) => {}
            // The program exited without reading its input; its exit
            // status below decides the outcome.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("command {} closed stdin before reading input", program);
            }
            Ok(Err(e)) => return Err(handle_exec_error(program)(e)),
            Err(_) => {
                return Err(handle_generic_error(eyre!(
                    "stdin writer of command {} panicked",
                    program
                )))
            }
        }
    }

    let stderr = str::from_utf8(&output.stderr)?.to_string();

    if output.status.success() {
        let stdout = str::from_utf8(&output.stdout)?.trim_end().to_string();

        trace!(
            "command executed successfully with stdout: {}, stderr: {}",
            stdout,
            stderr
        );

        Ok(ExecOutput { stdout, stderr })
    } else {
        Err(Error::external_command_failed(
            program.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
            output.status.code(),
            stderr,
        ))
    }
}

/**
   Spawn `program` with inherited stdio, and supervise it on a Tokio task
   that reports the exit status through the returned
   [`ProcessCompletion`].
*/
pub fn spawn_supervised(program: &str, args: &[&str]) -> Result<SupervisedProcess, Error> {
    debug!(
        "Spawning supervised process: {} {}",
        program,
        itertools::join(args, " ")
    );

    let mut child = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(handle_exec_error(program))?;

    let pid = child.id();

    info!("started process {} with pid {:?}", program, pid);

    let (kill_sender, mut kill_receiver) = oneshot::channel::<()>();
    let (exit_sender, completion) = ProcessCompletion::channel(program);
    let program_name = program.to_string();

    tokio::spawn(async move {
        let waited = tokio::select! {
            status = child.wait() => Some(status),
            Ok(()) = &mut kill_receiver => None,
        };

        let status = match waited {
            Some(status) => status,
            None => {
                info!("killing process {}", program_name);
                match child.start_kill() {
                    Ok(()) => child.wait().await,
                    Err(e) => Err(e),
                }
            }
        };

        let result = match status {
            Ok(status) => {
                let exit = ProcessExit::from(status);
                if exit.success() {
                    info!("process {} exited with {}", program_name, exit);
                } else {
                    warn!("process {} exited with {}", program_name, exit);
                }
                Ok(exit)
            }
            Err(e) => Err(Error::process_wait(program_name.clone(), e)),
        };

        // The receiver may be gone if nobody awaits the completion.
        let _ = exit_sender.send(result);
    });

    Ok(SupervisedProcess {
        handle: ProcessHandle::new(program.to_string(), pid, kill_sender),
        completion,
    })
}
