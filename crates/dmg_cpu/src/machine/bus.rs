use std::path::Path;

use crate::cpu::Bus;
use crate::error::{Error, Result};

use super::MEMORY_SIZE;

mod boot;
mod region;

pub use boot::{BOOT_DISABLE_ADDR, BOOT_ROM_SIZE};
pub use region::Region;

/// Start of work RAM; echo RAM at 0xE000 maps back onto it.
const WORK_RAM_START: u16 = 0xC000;
const ECHO_RAM_START: u16 = 0xE000;

/// The 64 KiB address space with region dispatch.
///
/// Every address is backed by a byte in `memory`, so reads and writes are
/// total over `u16`. Regions only change *how* an access lands: ROM drops
/// writes, echo RAM redirects into work RAM, and the boot overlay shadows the
/// first 256 bytes until software writes to 0xFF50.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemoryBus {
    memory: Box<[u8]>,
    boot_rom: [u8; BOOT_ROM_SIZE],
    boot_rom_enabled: bool,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self {
            memory: vec![0; MEMORY_SIZE].into_boxed_slice(),
            boot_rom: [0; BOOT_ROM_SIZE],
            boot_rom_enabled: false,
        }
    }
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `image` to address 0 and zero-fill the rest of the space.
    ///
    /// Images longer than 64 KiB are truncated; bank switching is left to a
    /// cartridge collaborator wrapping this bus.
    pub fn load(&mut self, image: &[u8]) {
        if image.len() > MEMORY_SIZE {
            log::warn!(
                "image is {} bytes; only the first {} are mapped",
                image.len(),
                MEMORY_SIZE
            );
        }

        let len = image.len().min(MEMORY_SIZE);
        self.memory[..len].copy_from_slice(&image[..len]);
        self.memory[len..].fill(0);
        log::debug!("loaded {len} byte image at 0x0000");
    }

    /// Read `path` and [`load`](Self::load) it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let image = read_image(path.as_ref())?;
        self.load(&image);
        Ok(())
    }

    /// Region that currently serves `addr`, taking the boot overlay into
    /// account.
    pub fn region(&self, addr: u16) -> Region {
        if self.boot_rom_enabled && (addr as usize) < BOOT_ROM_SIZE {
            Region::BootRom
        } else {
            Region::of(addr)
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        match self.region(addr) {
            Region::BootRom => self.boot_rom[addr as usize],
            Region::EchoRam => self.memory[echo_target(addr) as usize],
            _ => self.memory[addr as usize],
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match self.region(addr) {
            region if region.is_read_only() => {
                log::trace!("dropped write 0x{value:02X} to {region:?} at 0x{addr:04X}");
            }
            Region::EchoRam => self.memory[echo_target(addr) as usize] = value,
            Region::Io if addr == BOOT_DISABLE_ADDR => {
                self.memory[addr as usize] = value;
                self.disable_boot_rom();
            }
            _ => self.memory[addr as usize] = value,
        }
    }

    /// Little-endian word at `addr`; the high byte comes from `addr + 1`,
    /// wrapping to 0x0000.
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }
}

impl Bus for MemoryBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}

#[inline]
fn echo_target(addr: u16) -> u16 {
    addr - ECHO_RAM_START + WORK_RAM_START
}

pub(super) fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
