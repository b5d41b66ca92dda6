mod address_space;
mod error;

pub use address_space::AddressSpace;
pub use error::MemoryError;

pub const MEMMAX: usize = 65535;

pub fn little_endian(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/*
 * AddressableIO
 * this trait defines the block interface used to load programs and inspect
 * memory. Accesses past the end of the addressable range are reported as
 * errors, they never wrap.
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}
