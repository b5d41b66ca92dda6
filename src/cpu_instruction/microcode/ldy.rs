use super::*;

pub fn ldy(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    registers.register_y = byte;
    registers.update_nz_flags(byte);

    (
        resolution,
        format!(
            "[Y=0x{:02x}][S={}]",
            registers.register_y,
            registers.format_status()
        ),
    )
}
