use super::*;

/*
 * JSR
 * Push the address of the last byte of the instruction, high byte first,
 * then jump. One internal cycle is spent before the pushes and one to load
 * the command pointer.
 */
pub fn jsr(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);
    let target_address = resolution
        .target_address
        .expect("JSR must have an operand, check the instruction table");

    *cycles -= 1;
    let return_address = core.registers.command_pointer.wrapping_sub(1);
    core.stack_push_word(cycles, return_address, memory);
    core.registers.command_pointer = target_address;
    *cycles -= 1;

    (
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}]",
            core.registers.command_pointer, core.registers.stack_pointer
        ),
    )
}
