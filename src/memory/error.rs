use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize, usize),  // read len, address, address max
    WriteOverflow(usize, usize, usize), // write len, address, address max
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(read_len, addr, max_addr) => write!(
                f,
                "Could not READ {} bytes at address 0x{:04X}, address max is 0x{:04X}.",
                read_len, addr, max_addr
            ),
            MemoryError::WriteOverflow(write_len, addr, max_addr) => write!(
                f,
                "Could not WRITE {} bytes at address 0x{:04X}, address max is 0x{:04X}.",
                write_len, addr, max_addr
            ),
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
