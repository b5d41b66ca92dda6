use super::*;

/// # LDA - Load the accumulator
///
/// N & Z are set after the loaded value.
pub fn lda(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    registers.accumulator = byte;
    registers.update_nz_flags(byte);

    (
        resolution,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    )
}
