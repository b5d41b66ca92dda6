use super::*;

pub fn tsx(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, String) {
    let resolution = implied(core, cycles, memory, cpu_instruction);
    let registers = &mut core.registers;
    registers.register_x = registers.stack_pointer;
    registers.update_nz_flags(registers.register_x);

    (
        resolution,
        format!(
            "[X=0x{:02x}][S={}]",
            registers.register_x,
            registers.format_status()
        ),
    )
}
