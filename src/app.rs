//! Interactive session: wires the terminal, stopwatch, input thread and
//! signal handler together and waits for the first reason to exit.

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::cli::Args;
use crate::config::Config;
use crate::controller::{self, ControlExit, EventSource, TerminalEvents};
use crate::error::AppError;
use crate::logging;
use crate::render::Renderer;
use crate::signals;
use crate::stopwatch::{self, FrameSink, Stopwatch};
use crate::terminal::{RawModeGuard, Screen};

/// Apply command-line flags over a loaded config file.
pub fn effective_config(args: &Args, config: &Config) -> Config {
    let mut merged = config.clone();
    if args.paused {
        merged.timer.autostart = false;
    }
    if args.no_hints {
        merged.display.hints = false;
    }
    if args.no_alt_screen {
        merged.display.alternate_screen = false;
    }
    if let Some(level) = &args.log_level {
        merged.log.level = level.clone();
    }
    if let Some(file) = &args.log_file {
        merged.log.file = Some(file.clone());
    }
    merged
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub autostart: bool,
    pub hints: bool,
    pub alternate_screen: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, AppError> {
        let config = effective_config(args, config);
        Ok(Self {
            autostart: config.timer.autostart,
            hints: config.display.hints,
            alternate_screen: config.display.alternate_screen,
            log_level: logging::parse_level(&config.log.level)?,
            log_file: config.log.file,
        })
    }
}

/// How an interactive session ended normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// `q` or Ctrl+C in the terminal.
    Quit,
    /// SIGINT or SIGTERM from outside.
    Interrupted,
}

impl Exit {
    /// Process exit status for this outcome.
    pub fn code(self) -> i32 {
        match self {
            Exit::Quit => 0,
            Exit::Interrupted => 130,
        }
    }
}

/// Reasons a session ends, sent to the thread waiting in [`Session::run`].
#[derive(Debug)]
pub enum Shutdown {
    Controller(ControlExit),
    Signal,
}

/// Stopwatch plus input thread, independent of the real terminal.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    autostart: bool,
    tick: Duration,
}

impl Session {
    pub fn new(autostart: bool) -> Self {
        Self {
            autostart,
            tick: stopwatch::TICK,
        }
    }

    /// Use a custom tick length instead of one second.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Run until the first message on `rx`.
    ///
    /// Key events from `events` are handled on a separate "input" thread,
    /// which reports through `tx`. Other senders (signal handlers) may share
    /// the channel. The stopwatch is halted before this returns, so `sink`
    /// sees no frames afterwards even if more keys arrive.
    pub fn run<E>(
        &self,
        mut events: E,
        sink: Arc<dyn FrameSink>,
        tx: Sender<Shutdown>,
        rx: Receiver<Shutdown>,
    ) -> Result<Exit, AppError>
    where
        E: EventSource + Send + 'static,
    {
        let stopwatch = Arc::new(Stopwatch::with_tick(Arc::clone(&sink), self.tick));

        if self.autostart {
            stopwatch.start();
        } else if let Err(e) = sink.present(0) {
            log::warn!("failed to present frame: {}", e);
        }

        let input_watch = Arc::clone(&stopwatch);
        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let exit = controller::run(&mut events, &input_watch);
                let _ = tx.send(Shutdown::Controller(exit));
            })
            .map_err(AppError::Terminal)?;

        // The input thread holds a sender until it sends, so this only
        // fails if that thread died without reporting.
        let reason = rx.recv().unwrap_or(Shutdown::Signal);

        stopwatch.halt();
        log::info!("session ended at {}s", stopwatch.elapsed());

        match reason {
            Shutdown::Controller(ControlExit::Quit) => Ok(Exit::Quit),
            Shutdown::Controller(ControlExit::InputError(e)) => Err(AppError::Input(e)),
            Shutdown::Signal => Ok(Exit::Interrupted),
        }
    }
}

/// Run the stopwatch in the terminal until quit, input failure or signal.
///
/// The terminal is restored before this returns on every path. An input
/// failure is returned as [`AppError::Input`] and takes precedence over a
/// failure to restore the terminal.
pub fn run(settings: &Settings) -> Result<Exit, AppError> {
    let (tx, rx) = mpsc::channel();
    signals::install(tx.clone(), || Shutdown::Signal)?;

    let mut guard = RawModeGuard::enter(settings.alternate_screen).map_err(AppError::Terminal)?;
    log::info!("terminal session started");

    let screen = Arc::new(Screen::stdout(Renderer::new(settings.hints)));
    let outcome = Session::new(settings.autostart).run(TerminalEvents, screen, tx, rx);

    let restored = guard.exit().map_err(AppError::Terminal);
    let exit = outcome?;
    restored?;
    Ok(exit)
}
