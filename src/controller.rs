//! Keyboard input controller.
//!
//! This module handles:
//! - Mapping crossterm key events to stopwatch commands
//! - The blocking read loop that applies those commands until quit or error

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use crate::stopwatch::Stopwatch;

/// A stopwatch command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `r`: stop, reset to zero, start
    Restart,
    /// `p`: pause when running, resume when paused
    TogglePause,
    /// `q` or Ctrl+C: stop and leave
    Quit,
}

/// Why the controller loop returned.
#[derive(Debug)]
pub enum ControlExit {
    /// The user asked to quit.
    Quit,
    /// Reading the next terminal event failed.
    InputError(io::Error),
}

/// Source of terminal events. Blocks until the next one arrives.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}

/// Map a key event to a command.
///
/// Only key presses count; releases and repeats (reported by terminals with
/// enhanced keyboard support) are ignored, as are all unbound keys.
pub fn command_for_key(event: KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

/// Apply a command to the stopwatch. Returns `true` when the loop should end.
pub fn apply(command: Command, stopwatch: &Stopwatch) -> bool {
    match command {
        Command::Restart => {
            log::info!("restart at {}s", stopwatch.elapsed());
            stopwatch.restart();
            false
        }
        Command::TogglePause => {
            let running = stopwatch.toggle();
            log::info!(
                "{} at {}s",
                if running { "resumed" } else { "paused" },
                stopwatch.elapsed()
            );
            false
        }
        Command::Quit => {
            stopwatch.stop();
            log::info!("quit at {}s", stopwatch.elapsed());
            true
        }
    }
}

/// Read events until the user quits or the event source fails.
///
/// Also returns [`ControlExit::Quit`] on the first event after the
/// stopwatch was halted elsewhere; such events are not applied.
pub fn run<E: EventSource>(events: &mut E, stopwatch: &Stopwatch) -> ControlExit {
    loop {
        let event = match events.next_event() {
            Ok(event) => event,
            Err(e) => {
                log::error!("terminal event stream failed: {}", e);
                return ControlExit::InputError(e);
            }
        };

        if stopwatch.is_halted() {
            log::debug!("event after shutdown ignored");
            return ControlExit::Quit;
        }

        let Event::Key(key) = event else {
            continue;
        };

        if let Some(command) = command_for_key(key) {
            if apply(command, stopwatch) {
                return ControlExit::Quit;
            }
        }
    }
}
