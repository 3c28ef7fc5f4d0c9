//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the host (input surface,
//! backend loader) and the engine. The host only ever calls
//! [`Sketch::apply_draft_edit`], [`Sketch::commit`] and
//! [`Sketch::notify_backend_ready`].

mod options;
mod sketch;

pub use options::SketchOptions;
pub use sketch::{CommitOutcome, Readiness, Sketch};
