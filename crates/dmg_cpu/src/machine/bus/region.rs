/// Fixed regions of the 16-bit address space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    /// 0x0000–0x00FF while the boot overlay is enabled.
    BootRom,
    /// 0x0000–0x3FFF.
    RomBank0,
    /// 0x4000–0x7FFF, the switchable bank window.
    RomBankN,
    /// 0x8000–0x9FFF.
    VideoRam,
    /// 0xA000–0xBFFF, cartridge RAM.
    ExternalRam,
    /// 0xC000–0xDFFF.
    WorkRam,
    /// 0xE000–0xFDFF, mirrors 0xC000–0xDDFF.
    EchoRam,
    /// 0xFE00–0xFEFF, object attribute memory and the unusable gap after it.
    Oam,
    /// 0xFF00–0xFF7F.
    Io,
    /// 0xFF80–0xFFFE.
    HighRam,
    /// 0xFFFF.
    InterruptEnable,
}

impl Region {
    /// Region for `addr` ignoring the boot overlay; see
    /// [`MemoryBus::region`](crate::MemoryBus::region) for the live mapping.
    pub fn of(addr: u16) -> Self {
        match addr {
            0x0000..=0x3FFF => Region::RomBank0,
            0x4000..=0x7FFF => Region::RomBankN,
            0x8000..=0x9FFF => Region::VideoRam,
            0xA000..=0xBFFF => Region::ExternalRam,
            0xC000..=0xDFFF => Region::WorkRam,
            0xE000..=0xFDFF => Region::EchoRam,
            0xFE00..=0xFEFF => Region::Oam,
            0xFF00..=0xFF7F => Region::Io,
            0xFF80..=0xFFFE => Region::HighRam,
            0xFFFF => Region::InterruptEnable,
        }
    }

    /// CPU writes to ROM are dropped.
    pub fn is_read_only(self) -> bool {
        matches!(self, Region::BootRom | Region::RomBank0 | Region::RomBankN)
    }
}
