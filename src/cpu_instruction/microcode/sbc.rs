use super::*;

/// # SBC - Subtract with borrow
///
/// The accumulator receives A - M - (1 - C). The carry is the inverted
/// borrow: set when no borrow occurred. Binary subtraction is an addition of
/// the one's complement of the operand.
/// In decimal mode the flags are the ones of the binary subtraction, only
/// the accumulator is adjusted.
pub fn sbc(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;

    let borrow = !registers.c_flag_is_set() as u8;
    let decimal_result = registers
        .d_flag_is_set()
        .then(|| subtract_decimal(registers.accumulator, byte, borrow));
    add_binary(registers, !byte);

    if let Some(result) = decimal_result {
        registers.accumulator = result;
    }

    (
        resolution,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    )
}

fn subtract_decimal(a: u8, byte: u8, borrow: u8) -> u8 {
    let mut low = (a & 0x0f) as i16 - (byte & 0x0f) as i16 - borrow as i16;
    let mut half_borrow = 0;
    if low < 0 {
        low += 10;
        half_borrow = 1;
    }

    let mut high = (a >> 4) as i16 - (byte >> 4) as i16 - half_borrow;
    if high < 0 {
        high += 10;
    }

    (((high as u8) & 0x0f) << 4) | ((low as u8) & 0x0f)
}
