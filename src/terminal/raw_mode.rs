//! Raw terminal session with panic-safe cleanup.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, IsTerminal, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Static flag to track if raw mode is active (for panic handler)
pub(crate) static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Whether the active session switched to the alternate screen.
static ALT_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Guard that puts the terminal into raw mode, hides the cursor and
/// optionally switches to the alternate screen. Everything is restored on
/// drop, on [`RawModeGuard::exit`], or when a panic unwinds.
pub struct RawModeGuard {
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode and return a guard that will restore the terminal.
    ///
    /// # Errors
    /// `NotConnected` if stdout is not a terminal, or any error crossterm
    /// reports while switching modes.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "stdout is not a terminal",
            ));
        }

        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        // Created before the remaining fallible steps so an early return
        // still restores the terminal.
        let guard = Self { active: true };

        if alternate_screen {
            crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
            ALT_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        }
        crossterm::execute!(io::stdout(), Hide)?;

        Ok(guard)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restore the terminal now. After this, drop is a no-op.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            restore()?;
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(e) = restore() {
                log::warn!("failed to restore terminal: {}", e);
            }
        }
    }
}

fn restore() -> io::Result<()> {
    restore_to(&mut io::stdout())
}

/// Undo every terminal change, writing the escape sequences to `out`.
///
/// Each step runs even if an earlier one failed, and raw mode is always
/// disabled; the first error is returned afterwards.
fn restore_to<W: Write>(out: &mut W) -> io::Result<()> {
    let mut first_err = crossterm::execute!(out, Show).err();

    if ALT_SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        if let Err(e) = crossterm::execute!(out, LeaveAlternateScreen) {
            first_err.get_or_insert(e);
        }
    }

    RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
    if let Err(e) = disable_raw_mode() {
        first_err.get_or_insert(e);
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Install a panic hook that restores terminal state before panicking,
/// so the panic message is readable.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = restore();
        }
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_guard_enter_and_drop() {
        // Raw mode requires a real TTY
        match RawModeGuard::enter(false) {
            Ok(guard) => {
                assert!(guard.is_active());
                assert!(RAW_MODE_ACTIVE.load(Ordering::SeqCst));
                drop(guard);
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
            }
            Err(e) => {
                eprintln!("Skipping test (no TTY): {}", e);
            }
        }
    }

    #[test]
    fn test_raw_mode_guard_manual_exit() {
        match RawModeGuard::enter(false) {
            Ok(mut guard) => {
                guard.exit().expect("Should exit raw mode");
                assert!(!guard.is_active());
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));

                // Second exit and drop are no-ops
                guard.exit().expect("Second exit is a no-op");
                drop(guard);
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
            }
            Err(e) => {
                eprintln!("Skipping test (no TTY): {}", e);
            }
        }
    }

    /// Writer whose every write fails, like stdout redirected to a full device.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }
    }

    #[test]
    fn test_restore_disables_raw_mode_when_writes_fail() {
        // With a TTY this covers a real raw-mode session; without one it
        // still checks that a failed write does not short-circuit cleanup.
        let entered = crossterm::terminal::enable_raw_mode().is_ok();
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        ALT_SCREEN_ACTIVE.store(true, Ordering::SeqCst);

        let err = restore_to(&mut BrokenWriter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
        assert!(!ALT_SCREEN_ACTIVE.load(Ordering::SeqCst));
        if entered {
            assert!(!crossterm::terminal::is_raw_mode_enabled().unwrap());
        }
    }

    #[test]
    fn test_restore_succeeds_on_working_writer() {
        let mut out = Vec::new();
        restore_to(&mut out).unwrap();
        assert!(out.starts_with(b"\x1b[?25h"), "cursor not shown: {:?}", out);
    }

    #[test]
    fn test_panic_hook_installation() {
        install_panic_hook();
        install_panic_hook(); // Second call should be no-op
    }
}
