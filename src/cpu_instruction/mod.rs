pub const INIT_VECTOR_ADDR: u16 = 0xfffc;
pub const INTERRUPT_VECTOR_ADDR: u16 = 0xfffe;

mod cpu_instruction;
mod error;
mod instruction_table;
pub mod microcode;

pub use cpu_instruction::{CPUInstruction, LogLine, Microcode};
pub use error::InstructionError;
pub use instruction_table::{resolve_opcode, INSTRUCTION_TABLE};
