use super::*;

/// # STA - Store the accumulator
///
/// The flags are left untouched.
pub fn sta(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let byte = core.registers.accumulator;
    store(core, cycles, memory, cpu_instruction, byte)
}
