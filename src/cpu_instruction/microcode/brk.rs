use super::*;

/// # BRK - Break
///
/// Stub: the padding byte following the opcode is skipped and the Break flag
/// is set. Nothing is pushed and the vector at
/// [`INTERRUPT_VECTOR_ADDR`](crate::INTERRUPT_VECTOR_ADDR)
/// is not followed, the instruction only costs the cycles of a real break
/// sequence.
pub fn brk(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);
    core.fetch_byte(cycles, memory);
    core.registers.set_b_flag(true);
    *cycles -= 5;

    (resolution, format!("[S={}]", core.registers.format_status()))
}
