use super::*;

/// The only transfer that leaves the flags untouched.
pub fn txs(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = implied(core, cycles, memory, cpu_instruction);
    core.registers.stack_pointer = core.registers.register_x;

    (
        resolution,
        format!("[SP=0x{:02x}]", core.registers.stack_pointer),
    )
}
