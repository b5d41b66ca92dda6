use crate::addressing_mode::{AddressingMode, AddressingModeResolution};
use crate::memory::AddressSpace;
use crate::processor_core::ProcessorCore;
use std::fmt;

/// Microcode of an instruction. The opcode has already been fetched, the
/// microcode resolves its operands, performs the operation and charges every
/// cycle it spends. It returns the operand resolution and a description of
/// the outcome for the log line.
pub type Microcode = fn(
    &mut ProcessorCore,
    &mut i32,
    &mut AddressSpace,
    &CPUInstruction,
) -> (AddressingModeResolution, String);

/// One entry of the dispatch table.
#[derive(Clone, Copy)]
pub struct CPUInstruction {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    /// documented cost without page crossing nor taken branch
    pub cycles: u8,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub const fn new(
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        cycles: u8,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            opcode,
            mnemonic,
            addressing_mode,
            cycles,
            microcode,
        }
    }

    pub fn execute(
        &self,
        core: &mut ProcessorCore,
        cycles: &mut i32,
        memory: &mut AddressSpace,
    ) -> (AddressingModeResolution, String) {
        (self.microcode)(core, cycles, memory, self)
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CPUInstruction")
            .field("opcode", &format_args!("0x{:02x}", self.opcode))
            .field("mnemonic", &self.mnemonic)
            .field("addressing_mode", &self.addressing_mode)
            .field("cycles", &self.cycles)
            .finish()
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x} {: <4} {: <14} {} cycles",
            self.opcode, self.mnemonic, self.addressing_mode, self.cycles
        )
    }
}

#[derive(Debug)]
pub struct LogLine {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub resolution: AddressingModeResolution,
    pub outcome: String,
    pub cycles: i32,
}

impl LogLine {
    pub fn new(
        address: u16,
        cpu_instruction: &CPUInstruction,
        resolution: AddressingModeResolution,
        outcome: String,
        cycles: i32,
    ) -> LogLine {
        LogLine {
            address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic,
            resolution,
            outcome,
            cycles,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];
        bytes.extend_from_slice(&self.resolution.operands);
        let byte_sequence = format!(
            "({})",
            bytes
                .iter()
                .map(|byte| format!("{:02x}", byte))
                .collect::<Vec<String>>()
                .join(" ")
        );

        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}  {}[{}]",
            self.address, byte_sequence, self.mnemonic, self.resolution, self.outcome, self.cycles
        )
    }
}
