//! Process termination.

use rustix::process::{self, Signal};

/// Immediately terminate the process by raising `SIGABRT`.
///
/// This is an abnormal termination: no buffers are flushed, no exit
/// handlers run, and the caller never regains control. External monitors
/// observe the process ending with a fatal signal rather than an exit
/// code.
#[inline]
#[cold]
pub fn abort() -> ! {
    // Raise the signal in a loop, in case a handler catches it and
    // returns.
    loop {
        process::kill_process(process::getpid(), Signal::ABORT).ok();
    }
}

/// Terminate the process by raising `SIGILL`.
///
/// This emulates the effect of executing a trap instruction, which by
/// default immediately terminates the process.
#[inline]
#[cold]
pub fn trap() -> ! {
    loop {
        process::kill_process(process::getpid(), Signal::ILL).ok();
    }
}
