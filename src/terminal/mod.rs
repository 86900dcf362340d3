//! Terminal management: raw-mode session guard and the clock-face screen.

mod raw_mode;
mod screen;

pub use raw_mode::RawModeGuard;
pub use screen::{write_frame, Screen};
