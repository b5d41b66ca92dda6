use super::cpu_instruction::{resolve_opcode, InstructionError, LogLine, INIT_VECTOR_ADDR};
use super::memory::{little_endian, AddressSpace};
use super::registers::Registers;
use log::{debug, trace, warn};

/*
 * ProcessorCore
 * The registers of the processor and the fetch, decode & execute loop. Every
 * memory access made through the core costs one cycle, the cycles are taken
 * from a signed budget which may end below zero when the last instruction
 * costs more than what was left.
 */
pub struct ProcessorCore {
    pub registers: Registers,
}

impl Default for ProcessorCore {
    fn default() -> Self {
        Self {
            registers: Registers::new(INIT_VECTOR_ADDR),
        }
    }
}

impl ProcessorCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Power on state: the command pointer is set on the init vector location
    /// and the memory is cleared.
    pub fn reset(&mut self, memory: &mut AddressSpace) {
        self.registers = Registers::new(INIT_VECTOR_ADDR);
        memory.initialize();
        debug!("reset: {:?}", self.registers);
    }

    /// Reset the registers and start at the address stored in the init
    /// vector. The memory is left as is.
    pub fn boot(&mut self, memory: &AddressSpace) {
        let low = memory.read_byte(INIT_VECTOR_ADDR);
        let high = memory.read_byte(INIT_VECTOR_ADDR.wrapping_add(1));
        self.registers = Registers::new(little_endian([low, high]));
        debug!("boot: {:?}", self.registers);
    }

    pub fn fetch_byte(&mut self, cycles: &mut i32, memory: &AddressSpace) -> u8 {
        let byte = memory.read_byte(self.registers.command_pointer);
        self.registers.command_pointer = self.registers.command_pointer.wrapping_add(1);
        *cycles -= 1;

        byte
    }

    pub fn fetch_word(&mut self, cycles: &mut i32, memory: &AddressSpace) -> u16 {
        let low = self.fetch_byte(cycles, memory);
        let high = self.fetch_byte(cycles, memory);

        little_endian([low, high])
    }

    pub fn read_byte(&self, cycles: &mut i32, address: u16, memory: &AddressSpace) -> u8 {
        *cycles -= 1;
        memory.read_byte(address)
    }

    pub fn read_word(&self, cycles: &mut i32, address: u16, memory: &AddressSpace) -> u16 {
        let low = self.read_byte(cycles, address, memory);
        let high = self.read_byte(cycles, address.wrapping_add(1), memory);

        little_endian([low, high])
    }

    pub fn write_byte(&self, cycles: &mut i32, address: u16, value: u8, memory: &mut AddressSpace) {
        *cycles -= 1;
        memory.write_byte(address, value);
    }

    pub fn stack_push(&mut self, cycles: &mut i32, value: u8, memory: &mut AddressSpace) {
        self.write_byte(cycles, self.registers.stack_address(), value, memory);
        self.registers.stack_pointer = self.registers.stack_pointer.wrapping_sub(1);
    }

    /*
     * Push the high byte then the low byte. When both land in the stack page
     * without wrapping, the word is written at once, it ends little endian in
     * memory.
     */
    pub fn stack_push_word(&mut self, cycles: &mut i32, value: u16, memory: &mut AddressSpace) {
        if self.registers.stack_pointer > 0 {
            memory.write_word(cycles, value, self.registers.stack_address() - 1);
            self.registers.stack_pointer = self.registers.stack_pointer.wrapping_sub(2);
        } else {
            let [low, high] = value.to_le_bytes();
            self.stack_push(cycles, high, memory);
            self.stack_push(cycles, low, memory);
        }
    }

    pub fn stack_pull(&mut self, cycles: &mut i32, memory: &AddressSpace) -> u8 {
        self.registers.stack_pointer = self.registers.stack_pointer.wrapping_add(1);
        self.read_byte(cycles, self.registers.stack_address(), memory)
    }

    /// Run the instruction at the command pointer. An unknown opcode costs
    /// its fetch cycle and leaves the command pointer on the next byte.
    pub fn step(
        &mut self,
        cycles: &mut i32,
        memory: &mut AddressSpace,
    ) -> Result<LogLine, InstructionError> {
        let start = *cycles;
        let address = self.registers.command_pointer;
        let opcode = self.fetch_byte(cycles, memory);
        let cpu_instruction =
            resolve_opcode(opcode).ok_or(InstructionError::UnknownOpcode(opcode, address))?;
        let (resolution, outcome) = cpu_instruction.execute(self, cycles, memory);

        Ok(LogLine::new(
            address,
            cpu_instruction,
            resolution,
            outcome,
            start - *cycles,
        ))
    }

    /// Execute instructions until the budget is spent, return the number of
    /// cycles consumed. The last instruction always completes, hence the
    /// result may be over the budget.
    pub fn execute(&mut self, cycle_budget: i32, memory: &mut AddressSpace) -> i32 {
        let mut cycles = cycle_budget;

        while cycles > 0 {
            match self.step(&mut cycles, memory) {
                Ok(log_line) => trace!("{}", log_line),
                Err(error) => warn!("{}", error),
            }
        }

        cycle_budget - cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::AddressableIO;
    use crate::registers::STACK_BASE_ADDR;

    fn get_stuff(program: &[u8]) -> (AddressSpace, ProcessorCore) {
        let mut memory = AddressSpace::new();
        let mut core = ProcessorCore::new();
        core.reset(&mut memory);
        memory.write(INIT_VECTOR_ADDR as usize, program).unwrap();

        (memory, core)
    }

    #[test]
    fn test_reset() {
        let mut memory = AddressSpace::new();
        memory.write_byte(0x1234, 0xaa);
        let mut core = ProcessorCore::new();
        core.registers.accumulator = 0x12;
        core.registers.stack_pointer = 0x10;
        core.registers.set_c_flag(true);
        core.reset(&mut memory);
        assert_eq!(0xfffc, core.registers.command_pointer);
        assert_eq!(0xff, core.registers.stack_pointer);
        assert_eq!(0x00, core.registers.accumulator);
        assert_eq!(0x00, core.registers.register_x);
        assert_eq!(0x00, core.registers.register_y);
        assert_eq!(0x00, core.registers.status_register);
        assert_eq!(0x00, memory.read_byte(0x1234));
    }

    #[test]
    fn test_boot() {
        let mut memory = AddressSpace::new();
        memory.write(0xfffc, &[0x00, 0x08]).unwrap();
        memory.write_byte(0x0800, 0xea);
        let mut core = ProcessorCore::new();
        core.boot(&memory);
        assert_eq!(0x0800, core.registers.command_pointer);
        assert_eq!(0xea, memory.read_byte(0x0800));
    }

    #[test]
    fn test_fetch() {
        let (memory, mut core) = get_stuff(&[0x34, 0x12, 0x56]);
        let mut cycles = 10;
        assert_eq!(0x1234, core.fetch_word(&mut cycles, &memory));
        assert_eq!(0x56, core.fetch_byte(&mut cycles, &memory));
        assert_eq!(7, cycles);
        assert_eq!(0xffff, core.registers.command_pointer);
    }

    #[test]
    fn test_fetch_wraps_command_pointer() {
        let (mut memory, mut core) = get_stuff(&[]);
        memory.write_byte(0xffff, 0x42);
        core.registers.command_pointer = 0xffff;
        let mut cycles = 1;
        assert_eq!(0x42, core.fetch_byte(&mut cycles, &memory));
        assert_eq!(0x0000, core.registers.command_pointer);
        assert_eq!(0, cycles);
    }

    #[test]
    fn test_read_primitives_do_not_move_command_pointer() {
        let (mut memory, core) = get_stuff(&[]);
        memory.write(0x2000, &[0xcd, 0xab]).unwrap();
        let mut cycles = 0;
        assert_eq!(0xcd, core.read_byte(&mut cycles, 0x2000, &memory));
        assert_eq!(0xabcd, core.read_word(&mut cycles, 0x2000, &memory));
        assert_eq!(-3, cycles);
        assert_eq!(0xfffc, core.registers.command_pointer);
    }

    #[test]
    fn test_stack() {
        let (mut memory, mut core) = get_stuff(&[]);
        let mut cycles = 0;
        core.stack_push(&mut cycles, 0x11, &mut memory);
        core.stack_push_word(&mut cycles, 0x2233, &mut memory);
        assert_eq!(0xfc, core.registers.stack_pointer);
        assert_eq!(
            vec![0x33, 0x22, 0x11],
            memory.read(STACK_BASE_ADDR as usize + 0xfd, 3).unwrap()
        );
        assert_eq!(0x33, core.stack_pull(&mut cycles, &memory));
        assert_eq!(0x22, core.stack_pull(&mut cycles, &memory));
        assert_eq!(0x11, core.stack_pull(&mut cycles, &memory));
        assert_eq!(0xff, core.registers.stack_pointer);
        assert_eq!(-6, cycles);
    }

    #[test]
    fn test_stack_push_word_at_bottom_of_page() {
        let (mut memory, mut core) = get_stuff(&[]);
        core.registers.stack_pointer = 0x00;
        let mut cycles = 0;
        core.stack_push_word(&mut cycles, 0x1234, &mut memory);
        assert_eq!(0x12, memory.read_byte(0x0100));
        assert_eq!(0x34, memory.read_byte(0x01ff));
        assert_eq!(0xfe, core.registers.stack_pointer);
        assert_eq!(-2, cycles);
        assert_eq!(0x34, core.stack_pull(&mut cycles, &memory));
        assert_eq!(0x12, core.stack_pull(&mut cycles, &memory));
    }

    #[test]
    fn test_stack_push_word_wraps_stack_pointer() {
        let (mut memory, mut core) = get_stuff(&[]);
        core.registers.stack_pointer = 0x01;
        let mut cycles = 0;
        core.stack_push_word(&mut cycles, 0x1234, &mut memory);
        assert_eq!(0x34, memory.read_byte(0x0100));
        assert_eq!(0x12, memory.read_byte(0x0101));
        assert_eq!(0xff, core.registers.stack_pointer);
        assert_eq!(-2, cycles);
    }

    #[test]
    fn test_jsr_rts_with_stack_pointer_at_one() {
        let (mut memory, mut core) = get_stuff(&[]);
        memory.write(0x0200, &[0x20, 0x00, 0x30, 0xe8]).unwrap();
        memory.write_byte(0x3000, 0x60);
        core.registers.command_pointer = 0x0200;
        core.registers.stack_pointer = 0x01;
        let mut cycles = 0;

        let jsr = core.step(&mut cycles, &mut memory).unwrap();
        assert_eq!(7, jsr.cycles);
        assert_eq!(0x3000, core.registers.command_pointer);
        assert_eq!(0xff, core.registers.stack_pointer);
        assert_eq!(
            vec![0x02, 0x02],
            memory.read(STACK_BASE_ADDR as usize, 2).unwrap()
        );

        let rts = core.step(&mut cycles, &mut memory).unwrap();
        assert_eq!(6, rts.cycles);
        assert_eq!(0x0203, core.registers.command_pointer);
        assert_eq!(0x01, core.registers.stack_pointer);
        assert_eq!(-13, cycles);
    }

    #[test]
    fn test_execute_jsr_then_load() {
        let (mut memory, mut core) = get_stuff(&[0x20, 0x42, 0x42]);
        memory.write(0x4242, &[0xa9, 0x84]).unwrap();
        let cycles_used = core.execute(9, &mut memory);
        assert_eq!(9, cycles_used);
        assert_eq!(0x84, core.registers.accumulator);
        assert!(core.registers.n_flag_is_set());
        assert!(!core.registers.z_flag_is_set());
        assert_eq!(0x4244, core.registers.command_pointer);
    }

    #[test]
    fn test_execute_zero_budget() {
        let (mut memory, mut core) = get_stuff(&[0xa9, 0x01]);
        let registers = core.registers.clone();
        assert_eq!(0, core.execute(0, &mut memory));
        assert_eq!(registers, core.registers);
        assert_eq!(0, core.execute(-5, &mut memory));
    }

    #[test]
    fn test_execute_overshoots_budget() {
        let (mut memory, mut core) = get_stuff(&[0x20, 0x00, 0x10]);
        assert_eq!(7, core.execute(1, &mut memory));
        assert_eq!(0x1000, core.registers.command_pointer);
    }

    #[test]
    fn test_step_unknown_opcode() {
        let (mut memory, mut core) = get_stuff(&[0x02]);
        let mut cycles = 5;
        assert_eq!(
            InstructionError::UnknownOpcode(0x02, 0xfffc),
            core.step(&mut cycles, &mut memory).unwrap_err()
        );
        assert_eq!(4, cycles);
        assert_eq!(0xfffd, core.registers.command_pointer);
    }

    #[test]
    fn test_execute_continues_after_unknown_opcode() {
        let (mut memory, mut core) = get_stuff(&[0xff, 0xa9, 0x07]);
        assert_eq!(3, core.execute(3, &mut memory));
        assert_eq!(0x07, core.registers.accumulator);
    }
}
