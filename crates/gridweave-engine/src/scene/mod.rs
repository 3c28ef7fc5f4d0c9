//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw instructions, one per grid cell
//! - keep cell order (column-major) as the only ordering
//! - expose a byte-stable serialized form for determinism checks and dry runs

mod instruction;
mod list;

pub use instruction::DrawInstruction;
pub use list::DrawList;
