use super::*;

pub fn bcs(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let condition = core.registers.c_flag_is_set();
    branch(core, cycles, memory, cpu_instruction, condition)
}
