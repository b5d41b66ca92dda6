use super::*;

pub fn stx(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let byte = core.registers.register_x;
    store(core, cycles, memory, cpu_instruction, byte)
}
