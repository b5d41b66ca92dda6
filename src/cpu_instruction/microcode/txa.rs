use super::*;

pub fn txa(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = implied(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    registers.accumulator = registers.register_x;
    registers.update_nz_flags(registers.accumulator);

    (
        resolution,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    )
}
