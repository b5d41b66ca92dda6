use super::*;

/// # ADC - Add with carry
///
/// The accumulator receives A + M + C. In decimal mode both operands are
/// read as packed BCD, the result is packed BCD and the carry tells if the
/// decimal sum went over 99.
/// Note: the formula for the oVerflow bit comes from
/// http://www.righto.com/2012/12/the-6502-overflow-flag-explained.html
/// In decimal mode, Z still reflects the binary sum while N & V are read on
/// the sum before its high digit is adjusted, as the NMOS chip does.
pub fn adc(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;

    if registers.d_flag_is_set() {
        let a = registers.accumulator;
        let carry = registers.c_flag_is_set() as u8;
        let (intermediate, result) = add_decimal(a, byte, carry);
        let intermediate = intermediate as u8;

        registers.set_z_flag(a.wrapping_add(byte).wrapping_add(carry) == 0);
        registers.set_n_flag(intermediate & 0x80 != 0);
        registers.set_v_flag((a ^ intermediate) & (byte ^ intermediate) & 0x80 != 0);
        registers.set_c_flag(result > 0xff);
        registers.accumulator = result as u8;
    } else {
        add_binary(registers, byte);
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

/*
 * Digit by digit addition. A low digit over 9 is adjusted by 6 and carries
 * to the high digit. Returns the sum before and after the high digit is
 * adjusted, the carry out is bit 8 of the latter.
 */
fn add_decimal(a: u8, byte: u8, carry: u8) -> (u16, u16) {
    let mut low = ((a & 0x0f) + (byte & 0x0f) + carry) as u16;
    if low > 9 {
        low = ((low + 6) & 0x0f) + 0x10;
    }

    let intermediate = (a & 0xf0) as u16 + (byte & 0xf0) as u16 + low;
    let result = if intermediate >= 0xa0 {
        intermediate + 0x60
    } else {
        intermediate
    };

    (intermediate, result)
}
