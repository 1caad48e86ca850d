mod bus;
mod config;
mod emulator;

pub use bus::{MemoryBus, Region, BOOT_DISABLE_ADDR, BOOT_ROM_SIZE};
pub use config::MachineConfig;
pub use emulator::Machine;

/// Total addressable memory for the Game Boy (64 KiB).
const MEMORY_SIZE: usize = 0x10000;

#[cfg(test)]
mod tests;
