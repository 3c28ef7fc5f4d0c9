//! Gridweave engine crate.
//!
//! Computes grid-pattern frames from a committed configuration: cell layout,
//! per-cell shape geometry and pattern fill resolution. Drawing and pattern
//! fills are delegated to host-supplied backends (`render`).
//!
//! Entry point for hosts is [`core::Sketch`].

pub mod core;
pub mod error;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod config;
pub mod layout;
pub mod geometry;
pub mod pattern;
pub mod scene;
pub mod render;
pub mod staging;
