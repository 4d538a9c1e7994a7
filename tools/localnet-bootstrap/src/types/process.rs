/*!
   Handles to long-running child processes spawned by the bootstrap, such
   as the node daemon and the relayer.
*/

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::process::ExitStatus;
use tokio::sync::oneshot;

use crate::error::Error;

/**
   The way a supervised process terminated.

   `code` is `None` when the process was terminated by a signal.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        Self::new(status.code())
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/**
   A handle for terminating a supervised child process.

   Dropping the handle detaches from the process without killing it: the
   process keeps running and its [`ProcessCompletion`] still resolves when
   it exits.
*/
pub struct ProcessHandle {
    program: String,
    pid: Option<u32>,
    kill_sender: Option<oneshot::Sender<()>>,
}

impl ProcessHandle {
    pub fn new(program: String, pid: Option<u32>, kill_sender: oneshot::Sender<()>) -> Self {
        Self {
            program,
            pid,
            kill_sender: Some(kill_sender),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The OS process ID, if the process was still running when spawned.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /**
       Request the supervised process to be killed. Returns `false` if the
       kill was already requested or the process has already exited.
    */
    pub fn kill(&mut self) -> bool {
        match self.kill_sender.take() {
            Some(sender) => sender.send(()).is_ok(),
            None => false,
        }
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("program", &self.program)
            .field("pid", &self.pid)
            .finish()
    }
}

/**
   A future that resolves exactly once, when the supervised process exits.

   The future is consumed by awaiting it, so it cannot resolve twice. It
   cannot be used to cancel the process; use [`ProcessHandle::kill`] for that.
*/
#[must_use = "the completion signal does nothing unless awaited"]
pub struct ProcessCompletion {
    program: String,
    receiver: oneshot::Receiver<Result<ProcessExit, Error>>,
}

impl ProcessCompletion {
    pub fn new(program: String, receiver: oneshot::Receiver<Result<ProcessExit, Error>>) -> Self {
        Self { program, receiver }
    }

    /**
       Create a pair of completion signal and the sender used to resolve it.

       Used by [`CommandRunner`](crate::chain::exec::CommandRunner)
       implementations that do not spawn real processes.
    */
    pub fn channel(program: &str) -> (oneshot::Sender<Result<ProcessExit, Error>>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self::new(program.to_string(), receiver))
    }
}

impl Future for ProcessCompletion {
    type Output = Result<ProcessExit, Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;

        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(Error::completion_dropped(
                this.program.clone(),
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl fmt::Debug for ProcessCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessCompletion")
            .field("program", &self.program)
            .finish()
    }
}

/// A child process running under supervision, split into its kill handle
/// and its completion signal.
#[derive(Debug)]
pub struct SupervisedProcess {
    pub handle: ProcessHandle,
    pub completion: ProcessCompletion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completion_resolves_with_sent_exit() {
        let (sender, completion) = ProcessCompletion::channel("sifnoded");
        sender.send(Ok(ProcessExit::new(Some(7)))).unwrap();

        let exit = completion.await.unwrap();
        assert_eq!(exit.code, Some(7));
        assert!(!exit.success());
    }

    #[tokio::test]
    async fn completion_fails_when_supervisor_is_gone() {
        let (sender, completion) = ProcessCompletion::channel("sifnoded");
        drop(sender);

        let err = completion.await.unwrap_err();
        assert!(err.to_string().contains("sifnoded"));
    }

    #[test]
    fn kill_is_requested_only_once() {
        let (kill_sender, mut kill_receiver) = oneshot::channel();
        let mut handle = ProcessHandle::new("ebrelayer".to_string(), Some(42), kill_sender);

        assert!(handle.kill());
        assert!(!handle.kill());
        assert!(kill_receiver.try_recv().is_ok());
    }

    #[test]
    fn exit_display() {
        assert_eq!(ProcessExit::new(Some(0)).to_string(), "exit code 0");
        assert_eq!(ProcessExit::new(None).to_string(), "terminated by signal");
    }
}
