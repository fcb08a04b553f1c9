//! Diffreport alignment engine.

pub mod align;

pub use align::{grouped_opcodes, opcodes, OpTag, Opcode};
