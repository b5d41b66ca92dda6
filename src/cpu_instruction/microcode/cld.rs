use super::*;

pub fn cld(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    set_flag(core, cycles, memory, cpu_instruction, Registers::set_d_flag, false)
}
