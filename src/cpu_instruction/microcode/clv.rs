use super::*;

/// There is no instruction to set the overflow flag.
pub fn clv(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    set_flag(core, cycles, memory, cpu_instruction, Registers::set_v_flag, false)
}
