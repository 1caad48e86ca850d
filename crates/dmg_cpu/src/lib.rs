//! Sharp LR35902 (Game Boy DMG) CPU core.
//!
//! The crate models the CPU register file, the 64 KiB memory bus, a
//! table-driven fetch/decode/execute core and the T-cycle clock that
//! peripherals synchronize against. Video, audio, timers and interrupt
//! delivery sit outside and talk to the core through [`Bus`] and
//! [`ClockObserver`].

pub mod clock;
pub mod cpu;
mod error;
pub mod machine;

pub use clock::{Clock, ClockObserver, CPU_CLOCK_HZ, CYCLES_PER_FRAME};
pub use cpu::{
    disassemble, implemented_opcodes, instruction, Bus, Cpu, Flags, Instruction, Reg16, Reg8,
    Registers,
};
pub use error::{Error, Opcode, Result};
pub use machine::{Machine, MachineConfig, MemoryBus, Region, BOOT_DISABLE_ADDR, BOOT_ROM_SIZE};
