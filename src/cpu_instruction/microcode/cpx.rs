use super::*;

pub fn cpx(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let (resolution, byte) = read_operand(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    let value = registers.register_x;
    compare(registers, value, byte);

    (
        resolution,
        format!(
            "(0x{:02x})[X=0x{:02x}][S={}]",
            byte,
            registers.register_x,
            registers.format_status()
        ),
    )
}
