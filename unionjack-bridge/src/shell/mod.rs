//! Application Shell — winit lifecycle and event dispatch.
//!
//! The shell owns the winit event loop, creates the window and GPU state
//! on resume, builds the readout from config, and redraws when a clock
//! display ticks over.

pub(crate) mod app;
mod events;

pub use app::run;
