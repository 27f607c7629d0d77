//! PolyUI library - exposes the toolkit modules for testing
//!
//! The demo binary is in main.rs, but the widget interfaces, platform
//! families, and driver live here so tests can exercise them against an
//! in-memory output sink.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod config;
pub mod demo;
pub mod errors;
pub mod platform;
pub mod widget;
