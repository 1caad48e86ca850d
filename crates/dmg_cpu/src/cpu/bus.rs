/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU only ever talks to this trait. [`MemoryBus`](crate::MemoryBus) is
/// the default implementation; peripherals that want to observe or intercept
/// accesses wrap it in their own `Bus` and forward what they do not own.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read. The high byte wraps to 0x0000 at 0xFFFF.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write. The high byte wraps to 0x0000 at 0xFFFF.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    /// Advance bus-side peripherals by a given number of CPU cycles.
    ///
    /// Called once per `Cpu::step` after the instruction has executed.
    /// Default implementation does nothing.
    fn tick(&mut self, _cycles: u32) {}
}
