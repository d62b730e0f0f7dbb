use crate::error::Result;
use crate::machine::Interrupt;

/// IF register address.
pub const IF_ADDR: u16 = 0xFF0F;
/// IE register address.
pub const IE_ADDR: u16 = 0xFFFF;

/// Abstraction over the Game Boy bus (memory and IO).
///
/// Reads take `&self` so instruction decoding can inspect memory without any
/// side effects. Every access is fallible: an address nothing answers for is
/// an error, not a silent zero.
pub trait Bus {
    fn read8(&self, addr: u16) -> Result<u8>;
    fn write8(&mut self, addr: u16, value: u8) -> Result<()>;

    /// Little-endian 16-bit read.
    fn read16(&self, addr: u16) -> Result<u16> {
        let lo = self.read8(addr)?;
        let hi = self.read8(addr.wrapping_add(1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Little-endian 16-bit write.
    fn write16(&mut self, addr: u16, value: u16) -> Result<()> {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo)?;
        self.write8(addr.wrapping_add(1), hi)
    }

    /// Highest-priority interrupt that is both requested and enabled.
    ///
    /// The default goes through IF/IE on the bus; system buses can answer
    /// straight from their interrupt controller.
    fn pending_interrupt(&self) -> Result<Option<Interrupt>> {
        let active = self.read8(IF_ADDR)? & self.read8(IE_ADDR)?;
        Ok(Interrupt::highest(active))
    }

    /// Clear the request bit for `source`.
    fn acknowledge_interrupt(&mut self, source: Interrupt) -> Result<()> {
        let flags = self.read8(IF_ADDR)?;
        self.write8(IF_ADDR, flags & !source.mask())
    }
}
