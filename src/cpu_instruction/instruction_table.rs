use super::microcode::*;
use super::CPUInstruction;
use crate::addressing_mode::AddressingMode::{self, *};

const fn op(
    opcode: u8,
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    cycles: u8,
    microcode: super::Microcode,
) -> CPUInstruction {
    CPUInstruction::new(opcode, mnemonic, addressing_mode, cycles, microcode)
}

/*
 * Every implemented opcode with its documented cost. Page crossing and taken
 * branch penalties come on top of it.
 */
const INSTRUCTIONS: [CPUInstruction; 92] = [
    op(0xa9, "LDA", Immediate, 2, lda),
    op(0xa5, "LDA", ZeroPage, 3, lda),
    op(0xb5, "LDA", ZeroPageXIndexed, 4, lda),
    op(0xad, "LDA", Absolute, 4, lda),
    op(0xbd, "LDA", AbsoluteXIndexed, 4, lda),
    op(0xb9, "LDA", AbsoluteYIndexed, 4, lda),
    op(0xa1, "LDA", ZeroPageXIndexedIndirect, 6, lda),
    op(0xb1, "LDA", ZeroPageIndirectYIndexed, 5, lda),
    op(0xa2, "LDX", Immediate, 2, ldx),
    op(0xa6, "LDX", ZeroPage, 3, ldx),
    op(0xb6, "LDX", ZeroPageYIndexed, 4, ldx),
    op(0xae, "LDX", Absolute, 4, ldx),
    op(0xbe, "LDX", AbsoluteYIndexed, 4, ldx),
    op(0xa0, "LDY", Immediate, 2, ldy),
    op(0xa4, "LDY", ZeroPage, 3, ldy),
    op(0xb4, "LDY", ZeroPageXIndexed, 4, ldy),
    op(0xac, "LDY", Absolute, 4, ldy),
    op(0xbc, "LDY", AbsoluteXIndexed, 4, ldy),
    op(0x85, "STA", ZeroPage, 3, sta),
    op(0x95, "STA", ZeroPageXIndexed, 4, sta),
    op(0x8d, "STA", Absolute, 4, sta),
    op(0x9d, "STA", AbsoluteXIndexed, 5, sta),
    op(0x99, "STA", AbsoluteYIndexed, 5, sta),
    op(0x81, "STA", ZeroPageXIndexedIndirect, 6, sta),
    op(0x91, "STA", ZeroPageIndirectYIndexed, 6, sta),
    op(0x86, "STX", ZeroPage, 3, stx),
    op(0x96, "STX", ZeroPageYIndexed, 4, stx),
    op(0x8e, "STX", Absolute, 4, stx),
    op(0x84, "STY", ZeroPage, 3, sty),
    op(0x94, "STY", ZeroPageXIndexed, 4, sty),
    op(0x8c, "STY", Absolute, 4, sty),
    op(0x69, "ADC", Immediate, 2, adc),
    op(0x65, "ADC", ZeroPage, 3, adc),
    op(0x75, "ADC", ZeroPageXIndexed, 4, adc),
    op(0x6d, "ADC", Absolute, 4, adc),
    op(0x7d, "ADC", AbsoluteXIndexed, 4, adc),
    op(0x79, "ADC", AbsoluteYIndexed, 4, adc),
    op(0x61, "ADC", ZeroPageXIndexedIndirect, 6, adc),
    op(0x71, "ADC", ZeroPageIndirectYIndexed, 5, adc),
    op(0xe9, "SBC", Immediate, 2, sbc),
    op(0xe5, "SBC", ZeroPage, 3, sbc),
    op(0xf5, "SBC", ZeroPageXIndexed, 4, sbc),
    op(0xed, "SBC", Absolute, 4, sbc),
    op(0xfd, "SBC", AbsoluteXIndexed, 4, sbc),
    op(0xf9, "SBC", AbsoluteYIndexed, 4, sbc),
    op(0xe1, "SBC", ZeroPageXIndexedIndirect, 6, sbc),
    op(0xf1, "SBC", ZeroPageIndirectYIndexed, 5, sbc),
    op(0xc9, "CMP", Immediate, 2, cmp),
    op(0xc5, "CMP", ZeroPage, 3, cmp),
    op(0xd5, "CMP", ZeroPageXIndexed, 4, cmp),
    op(0xcd, "CMP", Absolute, 4, cmp),
    op(0xdd, "CMP", AbsoluteXIndexed, 4, cmp),
    op(0xd9, "CMP", AbsoluteYIndexed, 4, cmp),
    op(0xc1, "CMP", ZeroPageXIndexedIndirect, 6, cmp),
    op(0xd1, "CMP", ZeroPageIndirectYIndexed, 5, cmp),
    op(0xe0, "CPX", Immediate, 2, cpx),
    op(0xe4, "CPX", ZeroPage, 3, cpx),
    op(0xec, "CPX", Absolute, 4, cpx),
    op(0xc0, "CPY", Immediate, 2, cpy),
    op(0xc4, "CPY", ZeroPage, 3, cpy),
    op(0xcc, "CPY", Absolute, 4, cpy),
    op(0xaa, "TAX", Implied, 2, tax),
    op(0xa8, "TAY", Implied, 2, tay),
    op(0x8a, "TXA", Implied, 2, txa),
    op(0x98, "TYA", Implied, 2, tya),
    op(0xba, "TSX", Implied, 2, tsx),
    op(0x9a, "TXS", Implied, 2, txs),
    op(0xe8, "INX", Implied, 2, inx),
    op(0xc8, "INY", Implied, 2, iny),
    op(0xca, "DEX", Implied, 2, dex),
    op(0x88, "DEY", Implied, 2, dey),
    op(0x30, "BMI", Relative, 2, bmi),
    op(0xd0, "BNE", Relative, 2, bne),
    op(0xf0, "BEQ", Relative, 2, beq),
    op(0x90, "BCC", Relative, 2, bcc),
    op(0xb0, "BCS", Relative, 2, bcs),
    op(0x10, "BPL", Relative, 2, bpl),
    op(0x50, "BVC", Relative, 2, bvc),
    op(0x70, "BVS", Relative, 2, bvs),
    op(0x38, "SEC", Implied, 2, sec),
    op(0xf8, "SED", Implied, 2, sed),
    op(0x78, "SEI", Implied, 2, sei),
    op(0x18, "CLC", Implied, 2, clc),
    op(0xd8, "CLD", Implied, 2, cld),
    op(0x58, "CLI", Implied, 2, cli),
    op(0xb8, "CLV", Implied, 2, clv),
    op(0x4c, "JMP", Absolute, 3, jmp),
    op(0x6c, "JMP", Indirect, 5, jmp),
    op(0x20, "JSR", Absolute, 7, jsr),
    op(0x60, "RTS", Implied, 6, rts),
    op(0x00, "BRK", Implied, 7, brk),
    op(0xea, "NOP", Implied, 2, nop),
];

const fn build_table() -> [Option<CPUInstruction>; 256] {
    let mut table: [Option<CPUInstruction>; 256] = [None; 256];
    let mut index = 0;

    while index < INSTRUCTIONS.len() {
        let instruction = INSTRUCTIONS[index];
        assert!(
            table[instruction.opcode as usize].is_none(),
            "opcode declared twice in the instruction table"
        );
        table[instruction.opcode as usize] = Some(instruction);
        index += 1;
    }

    table
}

/// Dispatch table indexed by opcode, built at compile time.
pub static INSTRUCTION_TABLE: [Option<CPUInstruction>; 256] = build_table();

pub fn resolve_opcode(opcode: u8) -> Option<&'static CPUInstruction> {
    INSTRUCTION_TABLE[opcode as usize].as_ref()
}
