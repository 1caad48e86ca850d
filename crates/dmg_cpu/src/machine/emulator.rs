use crate::clock::CYCLES_PER_FRAME;
use crate::cpu::{disassemble, Cpu};
use crate::error::Result;

use super::{MachineConfig, MemoryBus};

/// `LD B,B`, used by test ROMs as a software breakpoint.
const SOFTWARE_BREAKPOINT: u8 = 0x40;

/// Emulator context: owns the CPU (with its register file and clock) and
/// the memory bus, and lends the bus to the CPU for each step.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Machine {
    pub cpu: Cpu,
    pub bus: MemoryBus,
    trace: bool,
}

impl Machine {
    /// Power-on machine with an empty (all zero) address space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a machine from `config`, loading the images it names.
    ///
    /// Fails with [`Error::Io`](crate::Error::Io) if an image cannot be read.
    pub fn from_config(config: &MachineConfig) -> Result<Self> {
        let mut machine = Self::new();
        machine.trace = config.trace;

        if let Some(path) = &config.image {
            log::info!("loading image '{}'", path.display());
            machine.bus.load_file(path)?;
        }

        match &config.boot_rom {
            Some(path) => {
                log::info!("loading boot ROM '{}'", path.display());
                machine.bus.load_boot_rom_file(path)?;
            }
            None if config.post_boot_state => machine.cpu.apply_post_boot_state(),
            None => {}
        }

        Ok(machine)
    }

    /// Load `image` flat at 0x0000 (see [`MemoryBus::load`]).
    pub fn load(&mut self, image: &[u8]) {
        self.bus.load(image);
    }

    /// Back to power-on: CPU state cleared. Memory contents and the boot
    /// overlay are left as loaded.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute one instruction and return the T-cycles it took.
    pub fn step(&mut self) -> Result<u32> {
        if self.echoes_instructions() {
            let pc = self.cpu.pc;
            let (text, _) = disassemble(&mut self.bus, pc);
            log::info!("0x{pc:04X}: {text}");
        }
        self.cpu.step(&mut self.bus)
    }

    /// Whether `step` logs the instruction itself. With trace-level logging
    /// on, `Cpu::step` already emits the line.
    pub(super) fn echoes_instructions(&self) -> bool {
        self.trace && !log::log_enabled!(log::Level::Trace)
    }

    /// Execute `steps` instructions, returning the cycles consumed.
    ///
    /// Stops at the first error; cycles of the instructions that did run are
    /// still on the CPU clock.
    pub fn run_steps(&mut self, steps: usize) -> Result<u64> {
        let start = self.cpu.cycles();
        for _ in 0..steps {
            self.step()?;
        }
        Ok(self.cpu.cycles() - start)
    }

    /// Run until at least one DMG frame worth of cycles (70224) has passed.
    pub fn run_frame(&mut self) -> Result<u64> {
        let start = self.cpu.cycles();
        while self.cpu.cycles() - start < CYCLES_PER_FRAME as u64 {
            self.step()?;
        }
        Ok(self.cpu.cycles() - start)
    }

    /// Run until the `LD B,B` software breakpoint has executed.
    ///
    /// Returns `Ok(true)` if it was hit within `max_steps` instructions.
    pub fn run_until_software_breakpoint(&mut self, max_steps: usize) -> Result<bool> {
        for _ in 0..max_steps {
            let at_breakpoint = !self.cpu.halted
                && !self.cpu.is_stopped()
                && self.bus.read(self.cpu.pc) == SOFTWARE_BREAKPOINT;
            self.step()?;
            if at_breakpoint {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
