//! UnionJack Bridge library target.
//!
//! Puts `unionjack-core` displays on screen: a wgpu implementation of the
//! core `Backend`, a winit shell, and JSON configuration. The binary entry
//! point is in `main.rs`; this file exists so `tests/*.rs` can reach the
//! config and readout logic.

pub mod config;
pub mod gfx;
pub mod readout;
pub mod shell;
