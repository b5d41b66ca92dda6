use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum InstructionError {
    UnknownOpcode(u8, u16), // opcode, address
}

impl fmt::Display for InstructionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InstructionError::UnknownOpcode(opcode, addr) => write!(
                f,
                "Instruction not handled: opcode 0x{:02x} at address #0x{:04X}.",
                opcode, addr
            ),
        }
    }
}

impl error::Error for InstructionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
