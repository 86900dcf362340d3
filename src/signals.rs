//! SIGINT/SIGTERM handling.
//!
//! In raw mode Ctrl+C arrives as a key event, so this mainly catches signals
//! sent from outside (`kill`, a closing session manager).

use std::sync::mpsc::Sender;

/// Install a process-wide handler that sends `message()` on `tx` for every
/// SIGINT or SIGTERM. Only one handler can be installed per process.
pub fn install<T: Send + 'static>(tx: Sender<T>, message: fn() -> T) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        log::info!("termination signal received");
        // The receiver is gone once shutdown is under way.
        let _ = tx.send(message());
    })
}
