use std::path::Path;

use crate::error::Result;

use super::MemoryBus;

/// Size of the DMG boot ROM overlay.
pub const BOOT_ROM_SIZE: usize = 0x100;

/// Writing any value here unmaps the boot overlay for good.
pub const BOOT_DISABLE_ADDR: u16 = 0xFF50;

impl MemoryBus {
    /// Install `image` as the boot overlay at 0x0000–0x00FF and enable it.
    ///
    /// Bytes beyond 256 are ignored; shorter images are zero-padded. The
    /// cartridge bytes underneath stay intact and reappear once software
    /// disables the overlay.
    pub fn load_boot_rom(&mut self, image: &[u8]) {
        if image.len() > BOOT_ROM_SIZE {
            log::warn!(
                "boot ROM is {} bytes; only the first {} are mapped",
                image.len(),
                BOOT_ROM_SIZE
            );
        }

        let len = image.len().min(BOOT_ROM_SIZE);
        self.boot_rom = [0; BOOT_ROM_SIZE];
        self.boot_rom[..len].copy_from_slice(&image[..len]);
        self.boot_rom_enabled = true;
        log::debug!("boot ROM overlay enabled ({len} bytes)");
    }

    pub fn load_boot_rom_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let image = super::read_image(path.as_ref())?;
        self.load_boot_rom(&image);
        Ok(())
    }

    #[inline]
    pub fn boot_rom_enabled(&self) -> bool {
        self.boot_rom_enabled
    }

    pub(super) fn disable_boot_rom(&mut self) {
        if self.boot_rom_enabled {
            self.boot_rom_enabled = false;
            log::debug!("boot ROM overlay disabled");
        }
    }
}
