use super::*;

pub fn nop(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    (implied(core, cycles, memory, cpu_instruction), String::new())
}
