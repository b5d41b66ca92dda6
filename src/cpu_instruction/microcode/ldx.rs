use super::*;

pub fn ldx(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    registers.register_x = byte;
    registers.update_nz_flags(byte);

    (
        resolution,
        format!(
            "[X=0x{:02x}][S={}]",
            registers.register_x,
            registers.format_status()
        ),
    )
}
