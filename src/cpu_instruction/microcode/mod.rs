use crate::addressing_mode::AddressingModeResolution;
use crate::cpu_instruction::CPUInstruction;
use crate::memory::AddressSpace;
use crate::processor_core::ProcessorCore;
use crate::registers::Registers;

mod adc;
mod bcc;
mod bcs;
mod beq;
mod bmi;
mod bne;
mod bpl;
mod brk;
mod bvc;
mod bvs;
mod clc;
mod cld;
mod cli;
mod clv;
mod cmp;
mod cpx;
mod cpy;
mod dex;
mod dey;
mod inx;
mod iny;
mod jmp;
mod jsr;
mod lda;
mod ldx;
mod ldy;
mod nop;
mod rts;
mod sbc;
mod sec;
mod sed;
mod sei;
mod sta;
mod stx;
mod sty;
mod tax;
mod tay;
mod tsx;
mod txa;
mod txs;
mod tya;

pub use adc::adc;
pub use bcc::bcc;
pub use bcs::bcs;
pub use beq::beq;
pub use bmi::bmi;
pub use bne::bne;
pub use bpl::bpl;
pub use brk::brk;
pub use bvc::bvc;
pub use bvs::bvs;
pub use clc::clc;
pub use cld::cld;
pub use cli::cli;
pub use clv::clv;
pub use cmp::cmp;
pub use cpx::cpx;
pub use cpy::cpy;
pub use dex::dex;
pub use dey::dey;
pub use inx::inx;
pub use iny::iny;
pub use jmp::jmp;
pub use jsr::jsr;
pub use lda::lda;
pub use ldx::ldx;
pub use ldy::ldy;
pub use nop::nop;
pub use rts::rts;
pub use sbc::sbc;
pub use sec::sec;
pub use sed::sed;
pub use sei::sei;
pub use sta::sta;
pub use stx::stx;
pub use sty::sty;
pub use tax::tax;
pub use tay::tay;
pub use tsx::tsx;
pub use txa::txa;
pub use txs::txs;
pub use tya::tya;

/*
 * Resolve the operand and read the byte it designates. Indexed reads pay one
 * more cycle when the effective address is not in the page of the base
 * address.
 */
fn read_operand(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> (AddressingModeResolution, u8) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);

    if resolution.page_crossed {
        *cycles -= 1;
    }

    let target_address = resolution
        .target_address
        .expect("read instructions must have an operand, check the instruction table");
    let byte = core.read_byte(cycles, target_address, memory);

    (resolution, byte)
}

/*
 * Implied instructions spend one internal cycle after the opcode fetch.
 */
fn implied(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &AddressSpace,
    cpu_instruction: &CPUInstruction,
) -> AddressingModeResolution {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);
    *cycles -= 1;

    resolution
}

/*
 * Indexed stores cannot skip the fix-up cycle of the effective address, they
 * pay it whether the page is crossed or not.
 */
fn store(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &mut AddressSpace,
    cpu_instruction: &CPUInstruction,
    byte: u8,
) -> (AddressingModeResolution, String) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);

    if cpu_instruction.addressing_mode.is_indexed() {
        *cycles -= 1;
    }

    let target_address = resolution
        .target_address
        .expect("store instructions must have an operand, check the instruction table");
    core.write_byte(cycles, target_address, byte, memory);

    (resolution, format!("0x{:02x}", byte))
}

/*
 * Common branch microcode. Not taken, the branch costs the opcode and the
 * offset fetch. Taken, it costs one more cycle and a second one when the
 * target lies in another page than the next instruction.
 */
fn branch(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &AddressSpace,
    cpu_instruction: &CPUInstruction,
    condition: bool,
) -> (AddressingModeResolution, String) {
    let resolution = cpu_instruction.addressing_mode.solve(core, cycles, memory);

    if condition {
        if let Some(target_address) = resolution.target_address {
            *cycles -= if resolution.page_crossed { 2 } else { 1 };
            core.registers.command_pointer = target_address;
        }
    }

    (
        resolution,
        format!("[CP=0x{:04X}]", core.registers.command_pointer),
    )
}

fn set_flag(
    core: &mut ProcessorCore,
    cycles: &mut i32,
    memory: &AddressSpace,
    cpu_instruction: &CPUInstruction,
    setter: fn(&mut Registers, bool),
    value: bool,
) -> (AddressingModeResolution, String) {
    let resolution = implied(core, cycles, memory, cpu_instruction);
    setter(&mut core.registers, value);

    (resolution, format!("[S={}]", core.registers.format_status()))
}

/*
 * Compare a register with memory as if it were subtracted: C is set when the
 * register is greater or equal, N & Z come from the difference.
 */
fn compare(registers: &mut Registers, register_value: u8, byte: u8) {
    registers.set_c_flag(register_value >= byte);
    registers.update_nz_flags(register_value.wrapping_sub(byte));
}

/*
 * Binary A + M + C, shared by ADC and SBC (which adds the one's complement
 * of its operand).
 */
fn add_binary(registers: &mut Registers, byte: u8) {
    let a = registers.accumulator;
    let sum = a as u16 + byte as u16 + registers.c_flag_is_set() as u16;
    let result = sum as u8;

    registers.set_c_flag(sum > 0xff);
    registers.set_v_flag((a ^ result) & (byte ^ result) & 0x80 != 0);
    registers.accumulator = result;
    registers.update_nz_flags(result);
}
