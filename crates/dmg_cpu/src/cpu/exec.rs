//! Primary-table instruction handlers, grouped by family.
//!
//! Handlers never move PC for fall-through instructions; `Cpu::step` does
//! that from the table's length once the handler returns `Flow::Next`.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
