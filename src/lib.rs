//! ascii-stopwatch library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod glyphs;
pub mod logging;
pub mod render;
pub mod signals;
pub mod stopwatch;
pub mod terminal;
