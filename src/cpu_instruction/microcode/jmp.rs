use super::*;

pub fn jmp(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);
    let target_address = resolution
        .target_address
        .expect("JMP must have an operand, check the instruction table");
    core.registers.command_pointer = target_address;

    (
        resolution,
        format!("[CP=0x{:04X}]", core.registers.command_pointer),
    )
}
