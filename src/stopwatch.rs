//! Shared stopwatch state and the background tick loop.
//!
//! The running flag and the elapsed counter live behind one mutex. A condvar
//! on that mutex lets [`Stopwatch::stop`] interrupt a tick wait immediately,
//! and `stop` joins the tick thread before returning, so no frame is
//! presented after it returns. [`Stopwatch::halt`] is a final stop: once
//! halted, nothing can start the tick loop again.

use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default tick length: one second per increment.
pub const TICK: Duration = Duration::from_secs(1);

/// Receives the elapsed value once per tick, before it is incremented.
pub trait FrameSink: Send + Sync + 'static {
    fn present(&self, elapsed: u64) -> io::Result<()>;
}

#[derive(Debug, Default)]
struct State {
    running: bool,
    elapsed: u64,
}

struct Shared {
    state: Mutex<State>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Default)]
struct Ticker {
    handle: Option<JoinHandle<()>>,
    halted: bool,
}

/// A start/stop/reset stopwatch driving a [`FrameSink`] from its own thread.
pub struct Stopwatch {
    shared: Arc<Shared>,
    sink: Arc<dyn FrameSink>,
    tick: Duration,
    /// Serializes start/stop/halt and owns the tick thread handle.
    ticker: Mutex<Ticker>,
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero that ticks once per second.
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        Self::with_tick(sink, TICK)
    }

    /// Create a stopped stopwatch with a custom tick length.
    pub fn with_tick(sink: Arc<dyn FrameSink>, tick: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::default()),
                wake: Condvar::new(),
            }),
            sink,
            tick,
            ticker: Mutex::new(Ticker::default()),
        }
    }

    fn ticker(&self) -> MutexGuard<'_, Ticker> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start ticking. No-op if already running or halted.
    pub fn start(&self) {
        let mut ticker = self.ticker();
        if ticker.halted || ticker.handle.is_some() {
            return;
        }

        self.shared.lock().running = true;

        let shared = Arc::clone(&self.shared);
        let sink = Arc::clone(&self.sink);
        let tick = self.tick;
        ticker.handle = Some(thread::spawn(move || tick_loop(&shared, sink.as_ref(), tick)));
        log::debug!("tick loop started");
    }

    /// Stop ticking and wait for the tick thread to exit. No-op if stopped.
    pub fn stop(&self) {
        self.stop_locked(&mut self.ticker());
    }

    /// Stop for good: later `start`, `restart`, `toggle` and `reset` calls
    /// are ignored. Used when the session is shutting down.
    pub fn halt(&self) {
        let mut ticker = self.ticker();
        ticker.halted = true;
        self.stop_locked(&mut ticker);
    }

    pub fn is_halted(&self) -> bool {
        self.ticker().halted
    }

    fn stop_locked(&self, ticker: &mut Ticker) {
        let Some(handle) = ticker.handle.take() else {
            return;
        };

        self.shared.lock().running = false;
        self.shared.wake.notify_all();

        if handle.join().is_err() {
            log::error!("tick loop panicked");
        }
        log::debug!("tick loop stopped at {}s", self.elapsed());
    }

    /// Set elapsed time back to zero.
    ///
    /// Meant to be called while stopped; see [`Stopwatch::restart`].
    pub fn reset(&self) {
        let ticker = self.ticker();
        if !ticker.halted {
            self.shared.lock().elapsed = 0;
        }
    }

    /// Stop, reset to zero, and start again.
    pub fn restart(&self) {
        self.stop();
        self.reset();
        self.start();
    }

    /// Pause if running, resume if paused. Returns whether it is now running.
    pub fn toggle(&self) -> bool {
        if self.is_running() {
            self.stop();
            false
        } else {
            self.start();
            self.is_running()
        }
    }

    /// Seconds counted since the last reset.
    pub fn elapsed(&self) -> u64 {
        self.shared.lock().elapsed
    }

    pub fn is_running(&self) -> bool {
        self.shared.lock().running
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Present, wait one tick, increment; until the running flag is cleared.
fn tick_loop(shared: &Shared, sink: &dyn FrameSink, tick: Duration) {
    let mut deadline = Instant::now();
    let mut state = shared.lock();

    while state.running {
        if let Err(e) = sink.present(state.elapsed) {
            log::warn!("failed to present frame: {}", e);
        }

        deadline += tick;
        loop {
            let now = Instant::now();
            if !state.running || now >= deadline {
                break;
            }
            state = shared
                .wake
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }

        // A tick cut short by stop() does not count.
        if state.running {
            state.elapsed = state.elapsed.saturating_add(1);
        }
    }
}
