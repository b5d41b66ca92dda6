use super::*;

/// # CMP - Compare the accumulator with memory
///
/// The accumulator is left untouched, only C, N & Z change.
pub fn cmp(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    let value = registers.accumulator;
    compare(registers, value, byte);

    (
        resolution,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            registers.accumulator,
            registers.format_status()
        ),
    )
}
