use super::*;

/*
 * RTS
 * Pull the address pushed by JSR, low byte first, and resume right after
 * it. Two internal cycles are spent before the pulls and one to increment
 * the command pointer.
 */
pub fn rts(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);

    *cycles -= 2;
    let low = core.stack_pull(cycles, memory);
    let high = core.stack_pull(cycles, memory);
    core.registers.command_pointer = u16::from_le_bytes([low, high]).wrapping_add(1);
    *cycles -= 1;

    (
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}]",
            core.registers.command_pointer, core.registers.stack_pointer
        ),
    )
}
