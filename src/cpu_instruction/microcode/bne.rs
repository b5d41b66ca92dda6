use super::*;

/// # BNE - Branch if not equal
///
/// Taken when the Zero flag is clear.
pub fn bne(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let condition = !core.registers.z_flag_is_set();
    branch(core, cycles, memory, cpu_instruction, condition)
}
