use super::*;

pub fn tay(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = implied(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    registers.register_y = registers.accumulator;
    registers.update_nz_flags(registers.register_y);

    (
        resolution,
        format!(
            "[Y=0x{:02x}][S={}]",
            registers.register_y,
            registers.format_status()
        ),
    )
}
