use cycle6502::{
    loader, AddressSpace, AddressableIO, AddressingMode, InstructionError, MemoryError,
    ProcessorCore, INSTRUCTION_TABLE,
};

fn get_stuff() -> (AddressSpace, ProcessorCore) {
    let mut memory = AddressSpace::new();
    let mut core = ProcessorCore::new();
    core.reset(&mut memory);

    (memory, core)
}

#[test]
fn execute_program() {
    let (mut memory, mut core) = get_stuff();
    memory
        .write(0x0800, &[0xa9, 0xc0, 0xaa, 0xe8, 0x69, 0x14])
        .unwrap();
    core.registers.command_pointer = 0x0800;
    let expected_output = [
        "#0x0800: (a9 c0)       LDA  #$c0     (#0x0801)  [A=0xc0][S=Nv-bdizc][2]",
        "#0x0802: (aa)          TAX                      [X=0xc0][S=Nv-bdizc][2]",
        "#0x0803: (e8)          INX                      [X=0xc1][S=Nv-bdizc][2]",
        "#0x0804: (69 14)       ADC  #$14     (#0x0805)  [A=0xd4][S=Nv-bdizc][2]",
    ];
    let mut cycles = 8;

    for expected in expected_output {
        let log_line = core.step(&mut cycles, &mut memory).unwrap();
        assert_eq!(expected, log_line.to_string());
    }
    assert_eq!(0, cycles);
    assert_eq!(0xc1, core.registers.register_x);
    assert_eq!(0xd4, core.registers.accumulator);
}

#[test]
fn jsr_then_load_from_reset() {
    let (mut memory, mut core) = get_stuff();
    memory.write(0xfffc, &[0x20, 0x42, 0x42]).unwrap();
    memory.write(0x4242, &[0xa9, 0x84]).unwrap();
    let cycles_used = core.execute(9, &mut memory);
    assert_eq!(9, cycles_used);
    assert_eq!(0x84, core.registers.accumulator);
    assert!(core.registers.n_flag_is_set());
    assert!(!core.registers.z_flag_is_set());
}

#[test]
fn execute_without_budget() {
    let (mut memory, mut core) = get_stuff();
    memory.write(0xfffc, &[0xa9, 0x84]).unwrap();
    let registers = core.registers.clone();
    assert_eq!(0, core.execute(0, &mut memory));
    assert_eq!(registers, core.registers);
}

#[test]
fn every_instruction_costs_its_base_cycles() {
    for instruction in INSTRUCTION_TABLE.iter().flatten() {
        let (mut memory, mut core) = get_stuff();
        memory.write_byte(0x0200, instruction.opcode);
        core.registers.command_pointer = 0x0200;

        // branches on a cleared flag are taken on a cleared status register
        if instruction.addressing_mode == AddressingMode::Relative
            && matches!(instruction.mnemonic, "BNE" | "BCC" | "BPL" | "BVC")
        {
            core.registers.status_register = 0xff;
        }

        let mut cycles = 0;
        let log_line = core.step(&mut cycles, &mut memory).unwrap();
        assert_eq!(
            instruction.cycles as i32, log_line.cycles,
            "{}",
            instruction
        );
    }
}

#[test]
fn indexed_load_across_page() {
    let (mut memory, mut core) = get_stuff();
    loader::load_program(&mut memory, 0x0200, &[0xbd, 0xff, 0x20, 0xbd, 0x00, 0x20]).unwrap();
    memory.write_byte(0x2100, 0x37);
    core.registers.command_pointer = 0x0200;
    core.registers.register_x = 0x01;

    let mut cycles = 0;
    let crossing = core.step(&mut cycles, &mut memory).unwrap();
    assert_eq!(0x37, core.registers.accumulator);
    assert_eq!(5, crossing.cycles);
    let same_page = core.step(&mut cycles, &mut memory).unwrap();
    assert_eq!(4, same_page.cycles);
}

#[test]
fn subroutine_round_trip() {
    let (mut memory, mut core) = get_stuff();
    loader::load_program(&mut memory, 0x0200, &[0x20, 0x00, 0x30, 0xe8]).unwrap();
    loader::load_program(&mut memory, 0x3000, &[0xc8, 0x60]).unwrap();
    loader::write_entry_jump(&mut memory, 0x0200);

    // JMP 3 + JSR 7 + INY 2 + RTS 6 + INX 2
    assert_eq!(20, core.execute(20, &mut memory));
    assert_eq!(0x0204, core.registers.command_pointer);
    assert_eq!(0xff, core.registers.stack_pointer);
    assert_eq!(0x01, core.registers.register_x);
    assert_eq!(0x01, core.registers.register_y);
}

#[test]
fn subroutine_call_at_bottom_of_stack() {
    let (mut memory, mut core) = get_stuff();
    // LDX #$01; TXS; JSR $3000; INX
    loader::load_program(&mut memory, 0x0200, &[0xa2, 0x01, 0x9a, 0x20, 0x00, 0x30, 0xe8]).unwrap();
    memory.write_byte(0x3000, 0x60);
    core.registers.command_pointer = 0x0200;

    // LDX 2 + TXS 2 + JSR 7 + RTS 6 + INX 2
    assert_eq!(19, core.execute(19, &mut memory));
    assert_eq!(0x0207, core.registers.command_pointer);
    assert_eq!(0x01, core.registers.stack_pointer);
    assert_eq!(0x02, core.registers.register_x);
    assert_eq!(vec![0x05, 0x02], memory.read(0x0100, 2).unwrap());
}

#[test]
fn countdown_loop() {
    let (mut memory, mut core) = get_stuff();
    // LDX #$03; loop: DEX; BNE loop; STX $10
    loader::load_program(&mut memory, 0x0200, &[0xa2, 0x03, 0xca, 0xd0, 0xfd, 0x86, 0x10]).unwrap();
    memory.write_byte(0x0010, 0xff);
    core.registers.command_pointer = 0x0200;

    // LDX 2 + 2 * (DEX 2 + BNE 3) + DEX 2 + BNE 2 + STX 3
    assert_eq!(19, core.execute(19, &mut memory));
    assert_eq!(0x00, memory.read_byte(0x0010));
    assert!(core.registers.z_flag_is_set());
    assert_eq!(0x0207, core.registers.command_pointer);
}

#[test]
fn unknown_opcode_is_skipped() {
    let (mut memory, mut core) = get_stuff();
    memory.write(0xfffc, &[0x02, 0xa0, 0x09]).unwrap();
    let mut cycles = 10;
    assert_eq!(
        Err(InstructionError::UnknownOpcode(0x02, 0xfffc)),
        core.step(&mut cycles, &mut memory).map(|line| line.cycles)
    );
    assert_eq!(9, cycles);

    core.reset(&mut memory);
    memory.write(0xfffc, &[0x02, 0xa0, 0x09]).unwrap();
    assert_eq!(3, core.execute(3, &mut memory));
    assert_eq!(0x09, core.registers.register_y);
}

#[test]
fn load_past_end_of_memory() {
    let mut memory = AddressSpace::new();
    assert_eq!(
        Err(MemoryError::WriteOverflow(4, 0xfffd, 0xffff)),
        loader::load_program(&mut memory, 0xfffd, &[0xea; 4])
    );
}

#[test]
fn boot_from_init_vector() {
    let mut memory = AddressSpace::new();
    let mut core = ProcessorCore::new();
    loader::load_program(&mut memory, 0x0800, &[0xa9, 0x00]).unwrap();
    loader::write_init_vector(&mut memory, 0x0800);
    core.boot(&memory);
    assert_eq!(2, core.execute(2, &mut memory));
    assert!(core.registers.z_flag_is_set());
    assert_eq!(0x0802, core.registers.command_pointer);
}
