mod addressing_mode;
mod cpu_instruction;
pub mod loader;
pub mod memory;
mod processor_core;
mod registers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use addressing_mode::{AddressingMode, AddressingModeResolution};
pub use cpu_instruction::{
    resolve_opcode, CPUInstruction, InstructionError, LogLine, INIT_VECTOR_ADDR,
    INSTRUCTION_TABLE, INTERRUPT_VECTOR_ADDR,
};
pub use memory::{AddressSpace, AddressableIO, MemoryError};
pub use processor_core::ProcessorCore;
pub use registers::{Registers, STACK_BASE_ADDR};
