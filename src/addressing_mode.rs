use super::memory::AddressSpace;
use super::processor_core::ProcessorCore;
use std::fmt;

/// Operand resolution of every addressing mode the instruction table uses.
///
/// Solving a mode consumes the operand bytes at the command pointer and
/// charges one cycle per byte touched plus one cycle for the zero page index
/// additions. The final access to the target address is left to the
/// microcode, as is the page crossing penalty since reads and writes do not
/// pay it the same way.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageXIndexed,
    ZeroPageYIndexed,
    ZeroPageXIndexedIndirect,
    ZeroPageIndirectYIndexed,
    Absolute,
    AbsoluteXIndexed,
    AbsoluteYIndexed,
    Indirect,
    Relative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressingModeResolution {
    pub operands: Vec<u8>,
    pub addressing_mode: AddressingMode,
    pub target_address: Option<u16>,
    pub page_crossed: bool,
}

impl AddressingModeResolution {
    fn new(
        operands: Vec<u8>,
        addressing_mode: AddressingMode,
        target_address: Option<u16>,
        page_crossed: bool,
    ) -> Self {
        AddressingModeResolution {
            operands,
            addressing_mode,
            target_address,
            page_crossed,
        }
    }

    fn format_operands(&self) -> String {
        let word = || match self.operands[..] {
            [low, high] => u16::from_le_bytes([low, high]),
            _ => 0,
        };
        let byte = || self.operands.first().copied().unwrap_or_default();

        match self.addressing_mode {
            AddressingMode::Implied => String::new(),
            AddressingMode::Immediate => format!("#${:02x}", byte()),
            AddressingMode::ZeroPage => format!("${:02x}", byte()),
            AddressingMode::ZeroPageXIndexed => format!("${:02x},X", byte()),
            AddressingMode::ZeroPageYIndexed => format!("${:02x},Y", byte()),
            AddressingMode::ZeroPageXIndexedIndirect => format!("(${:02x},X)", byte()),
            AddressingMode::ZeroPageIndirectYIndexed => format!("(${:02x}),Y", byte()),
            AddressingMode::Absolute => format!("${:04X}", word()),
            AddressingMode::AbsoluteXIndexed => format!("${:04X},X", word()),
            AddressingMode::AbsoluteYIndexed => format!("${:04X},Y", word()),
            AddressingMode::Indirect => format!("(${:04X})", word()),
            AddressingMode::Relative => {
                format!("${:04X}", self.target_address.unwrap_or_default())
            }
        }
    }
}

impl fmt::Display for AddressingModeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.addressing_mode, self.target_address) {
            (AddressingMode::Implied, _) | (AddressingMode::Relative, _) | (_, None) => {
                write!(f, "{: <9}         ", self.format_operands())
            }
            (_, Some(addr)) => write!(f, "{: <9}(#0x{:04X})", self.format_operands(), addr),
        }
    }
}

impl AddressingMode {
    /*
     * solve
     * Consume the operand bytes following the opcode and compute the
     * effective address. The command pointer is left on the next opcode.
     */
    pub fn solve(
        &self,
        core: &mut ProcessorCore,
        cycles: &mut i32,
        memory: &AddressSpace,
    ) -> AddressingModeResolution {
        match *self {
            AddressingMode::Implied => AddressingModeResolution::new(vec![], *self, None, false),
            AddressingMode::Immediate => {
                // the operand byte is charged when the microcode reads it
                let address = core.registers.command_pointer;
                core.registers.command_pointer = address.wrapping_add(1);
                AddressingModeResolution::new(
                    vec![memory.read_byte(address)],
                    *self,
                    Some(address),
                    false,
                )
            }
            AddressingMode::ZeroPage => {
                let zero_page = core.fetch_byte(cycles, memory);
                AddressingModeResolution::new(vec![zero_page], *self, Some(zero_page as u16), false)
            }
            AddressingMode::ZeroPageXIndexed => {
                let zero_page = core.fetch_byte(cycles, memory);
                let target = zero_page.wrapping_add(core.registers.register_x);
                *cycles -= 1;
                AddressingModeResolution::new(vec![zero_page], *self, Some(target as u16), false)
            }
            AddressingMode::ZeroPageYIndexed => {
                let zero_page = core.fetch_byte(cycles, memory);
                let target = zero_page.wrapping_add(core.registers.register_y);
                *cycles -= 1;
                AddressingModeResolution::new(vec![zero_page], *self, Some(target as u16), false)
            }
            AddressingMode::ZeroPageXIndexedIndirect => {
                let zero_page = core.fetch_byte(cycles, memory);
                let pointer = zero_page.wrapping_add(core.registers.register_x);
                *cycles -= 1;
                let target = read_zero_page_word(core, cycles, pointer, memory);
                AddressingModeResolution::new(vec![zero_page], *self, Some(target), false)
            }
            AddressingMode::ZeroPageIndirectYIndexed => {
                let zero_page = core.fetch_byte(cycles, memory);
                let base = read_zero_page_word(core, cycles, zero_page, memory);
                let target = base.wrapping_add(core.registers.register_y as u16);
                AddressingModeResolution::new(
                    vec![zero_page],
                    *self,
                    Some(target),
                    crosses_page_boundary(base, target),
                )
            }
            AddressingMode::Absolute => {
                let address = core.fetch_word(cycles, memory);
                AddressingModeResolution::new(
                    address.to_le_bytes().to_vec(),
                    *self,
                    Some(address),
                    false,
                )
            }
            AddressingMode::AbsoluteXIndexed => {
                let base = core.fetch_word(cycles, memory);
                let target = base.wrapping_add(core.registers.register_x as u16);
                AddressingModeResolution::new(
                    base.to_le_bytes().to_vec(),
                    *self,
                    Some(target),
                    crosses_page_boundary(base, target),
                )
            }
            AddressingMode::AbsoluteYIndexed => {
                let base = core.fetch_word(cycles, memory);
                let target = base.wrapping_add(core.registers.register_y as u16);
                AddressingModeResolution::new(
                    base.to_le_bytes().to_vec(),
                    *self,
                    Some(target),
                    crosses_page_boundary(base, target),
                )
            }
            AddressingMode::Indirect => {
                // NMOS behaviour: the pointer high byte never leaves the page
                let pointer = core.fetch_word(cycles, memory);
                let low = core.read_byte(cycles, pointer, memory);
                let high = core.read_byte(
                    cycles,
                    (pointer & 0xff00) | (pointer.wrapping_add(1) & 0x00ff),
                    memory,
                );
                AddressingModeResolution::new(
                    pointer.to_le_bytes().to_vec(),
                    *self,
                    Some(u16::from_le_bytes([low, high])),
                    false,
                )
            }
            AddressingMode::Relative => {
                let offset = core.fetch_byte(cycles, memory);
                let next_instruction = core.registers.command_pointer;
                let target = resolve_relative(next_instruction, offset);
                AddressingModeResolution::new(
                    vec![offset],
                    *self,
                    Some(target),
                    crosses_page_boundary(next_instruction, target),
                )
            }
        }
    }

    /// Indexed modes whose writes always pay the page crossing cycle.
    pub fn is_indexed(&self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteXIndexed
                | AddressingMode::AbsoluteYIndexed
                | AddressingMode::ZeroPageIndirectYIndexed
        )
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            AddressingMode::Implied => "implied",
            AddressingMode::Immediate => "immediate",
            AddressingMode::ZeroPage => "zero page",
            AddressingMode::ZeroPageXIndexed => "zero page,X",
            AddressingMode::ZeroPageYIndexed => "zero page,Y",
            AddressingMode::ZeroPageXIndexedIndirect => "(zero page,X)",
            AddressingMode::ZeroPageIndirectYIndexed => "(zero page),Y",
            AddressingMode::Absolute => "absolute",
            AddressingMode::AbsoluteXIndexed => "absolute,X",
            AddressingMode::AbsoluteYIndexed => "absolute,Y",
            AddressingMode::Indirect => "indirect",
            AddressingMode::Relative => "relative",
        };

        f.pad(name)
    }
}

/// Both bytes of a zero page pointer, the high byte wraps within page zero.
fn read_zero_page_word(
    core: &ProcessorCore,
    cycles: &mut i32,
    pointer: u8,
    memory: &AddressSpace,
) -> u16 {
    let low = core.read_byte(cycles, pointer as u16, memory);
    let high = core.read_byte(cycles, pointer.wrapping_add(1) as u16, memory);

    u16::from_le_bytes([low, high])
}

pub fn crosses_page_boundary(base_addr: u16, target_addr: u16) -> bool {
    base_addr & 0xff00 != target_addr & 0xff00
}

pub fn resolve_relative(next_instruction: u16, offset: u8) -> u16 {
    next_instruction.wrapping_add_signed(offset as i8 as i16)
}
