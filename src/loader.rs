use super::cpu_instruction::INIT_VECTOR_ADDR;
use super::memory::{AddressSpace, AddressableIO, MemoryError};

const JMP_ABSOLUTE: u8 = 0x4c;

/// Copy a raw program in memory at `start`, return the address it was loaded
/// at. A program that does not fit before the end of the address space is
/// not loaded at all.
pub fn load_program(
    memory: &mut AddressSpace,
    start: u16,
    program: &[u8],
) -> Result<u16, MemoryError> {
    memory.write(start as usize, program)?;

    Ok(start)
}

/*
 * After a reset the processor starts on the init vector location itself, a
 * JMP placed there sends it to the program.
 */
pub fn write_entry_jump(memory: &mut AddressSpace, target: u16) {
    let [low, high] = target.to_le_bytes();
    memory.write_byte(INIT_VECTOR_ADDR, JMP_ABSOLUTE);
    memory.write_byte(INIT_VECTOR_ADDR + 1, low);
    memory.write_byte(INIT_VECTOR_ADDR + 2, high);
}

pub fn write_init_vector(memory: &mut AddressSpace, target: u16) {
    let mut cycles = 0;
    memory.write_word(&mut cycles, target, INIT_VECTOR_ADDR);
}
