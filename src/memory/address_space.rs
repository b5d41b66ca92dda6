use super::*;

/// The whole 64 KiB addressable range of the processor.
///
/// There is no unmapped area: every 16 bit address reads and writes a byte of
/// this array. Cycle accounting is not done here, the processor charges its
/// own accesses.
pub struct AddressSpace {
    data: Box<[u8; MEMMAX + 1]>,
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self {
            data: Box::new([0x00; MEMMAX + 1]),
        }
    }
}

impl AddressSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self) {
        self.data.fill(0x00);
    }

    pub fn read_byte(&self, address: u16) -> u8 {
        self.data[address as usize]
    }

    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }

    /// Store `value` little endian at `address` and `address + 1`, this costs
    /// two cycles.
    ///
    /// # Panics
    ///
    /// A word written at 0xFFFF does not fit in the address space. This is a
    /// caller bug, it is not wrapped to 0x0000.
    pub fn write_word(&mut self, cycles: &mut i32, value: u16, address: u16) {
        let [low, high] = value.to_le_bytes();
        let address = address as usize;
        self.data[address] = low;
        self.data[address + 1] = high;
        *cycles -= 2;
    }

    /// Hexadecimal dump, 16 bytes per line.
    pub fn dump(&self, start: usize, len: usize) -> Result<Vec<String>, MemoryError> {
        let bytes = self.read(start, len)?;

        Ok(bytes
            .chunks(16)
            .enumerate()
            .map(|(index, chunk)| {
                let line = chunk
                    .iter()
                    .map(|byte| format!("{:02x}", byte))
                    .collect::<Vec<String>>()
                    .join(" ");
                format!("#0x{:04X}: {}", start + index * 16, line)
            })
            .collect())
    }
}

impl AddressableIO for AddressSpace {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if self.data.len() >= addr + len {
            Ok(self.data[addr..addr + len].to_vec())
        } else {
            Err(MemoryError::ReadOverflow(len, addr, MEMMAX))
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        if location + data.len() > self.data.len() {
            Err(MemoryError::WriteOverflow(data.len(), location, MEMMAX))
        } else {
            self.data[location..location + data.len()].copy_from_slice(data);

            Ok(())
        }
    }

    fn get_size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        let mut memory = AddressSpace::new();
        memory.write_byte(0x0000, 0x12);
        memory.write_byte(0xffff, 0x34);
        memory.initialize();
        assert_eq!(0x00, memory.read_byte(0x0000));
        assert_eq!(0x00, memory.read_byte(0xffff));
        memory.initialize();
        assert_eq!(vec![0x00; 4], memory.read(0x8000, 4).unwrap());
    }

    #[test]
    fn test_write_word() {
        let mut memory = AddressSpace::new();
        let mut cycles = 10;
        memory.write_word(&mut cycles, 0x4284, 0x0200);
        assert_eq!(0x84, memory.read_byte(0x0200));
        assert_eq!(0x42, memory.read_byte(0x0201));
        assert_eq!(8, cycles);
    }

    #[test]
    fn test_write_word_at_top_of_memory() {
        let mut memory = AddressSpace::new();
        let mut cycles = 0;
        memory.write_word(&mut cycles, 0xbeef, 0xfffe);
        assert_eq!(vec![0xef, 0xbe], memory.read(0xfffe, 2).unwrap());
    }

    #[test]
    #[should_panic]
    fn test_write_word_past_end_of_memory() {
        let mut memory = AddressSpace::new();
        let mut cycles = 0;
        memory.write_word(&mut cycles, 0xbeef, 0xffff);
    }

    #[test]
    fn test_block_write_overflow() {
        let mut memory = AddressSpace::new();
        assert_eq!(
            Err(MemoryError::WriteOverflow(3, 0xfffe, MEMMAX)),
            memory.write(0xfffe, &[0x01, 0x02, 0x03])
        );
        assert_eq!(0x00, memory.read_byte(0xfffe));
    }

    #[test]
    fn test_block_read_overflow() {
        let memory = AddressSpace::new();
        assert_eq!(
            Err(MemoryError::ReadOverflow(2, 0xffff, MEMMAX)),
            memory.read(0xffff, 2)
        );
        assert_eq!(0x10000, memory.get_size());
    }

    #[test]
    fn test_dump() {
        let mut memory = AddressSpace::new();
        memory.write(0x0800, &[0xa9, 0xc0, 0xaa]).unwrap();
        let lines = memory.dump(0x0800, 20).unwrap();
        assert_eq!(2, lines.len());
        assert_eq!(
            "#0x0800: a9 c0 aa 00 00 00 00 00 00 00 00 00 00 00 00 00",
            lines[0]
        );
        assert_eq!("#0x0810: 00 00 00 00", lines[1]);
    }
}
