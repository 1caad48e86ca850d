mod alu;
mod bus;
mod cb;
mod disasm;
mod exec;
mod helpers;
mod init;
mod regs;
mod table;

pub use bus::Bus;
pub use disasm::disassemble;
pub use regs::{Flags, Reg16, Reg8, Registers};
pub use table::{implemented_opcodes, instruction, Instruction};

use crate::clock::Clock;
use crate::error::{Error, Opcode, Result};
use table::Flow;

/// Cycle cost reported while the CPU sits in HALT or STOP.
const IDLE_CYCLES: u32 = 4;

/// LR35902 CPU core: register file, PC/SP and the cycle clock.
///
/// Each [`Cpu::step`] is one atomic fetch/decode/execute transition driven by
/// the dispatch tables in `table`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cpu {
    pub regs: Registers,
    pub pc: u16,
    pub sp: u16,
    /// Interrupt master enable, set by EI/RETI and cleared by DI. The CPU
    /// only records it; servicing interrupts belongs to an outer controller.
    pub ime: bool,
    pub halted: bool,
    stopped: bool,
    clock: Clock,
}

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// An opcode without a table entry fails with
    /// [`Error::UnimplementedOpcode`] before anything is mutated, so calling
    /// `step` again reports the same opcode at the same PC.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        if self.halted || self.stopped {
            self.clock.advance(IDLE_CYCLES);
            bus.tick(IDLE_CYCLES);
            return Ok(IDLE_CYCLES);
        }

        let pc = self.pc;
        let opcode = match bus.read8(pc) {
            0xCB => Opcode::Prefixed(bus.read8(pc.wrapping_add(1))),
            op => Opcode::Primary(op),
        };

        let Some(instr) = table::instruction(opcode) else {
            log::error!(
                "unimplemented opcode {opcode} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                sp = self.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            return Err(Error::UnimplementedOpcode { opcode, pc });
        };

        if log::log_enabled!(log::Level::Trace) {
            let (text, _) = disassemble(bus, pc);
            log::trace!(
                "{pc:04X}: {text:<20} AF={af:04X} BC={bc:04X} DE={de:04X} HL={hl:04X} SP={sp:04X}",
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
                sp = self.sp,
            );
        }

        let code = match opcode {
            Opcode::Primary(op) | Opcode::Prefixed(op) => op,
        };
        let cycles = match (instr.handler)(self, bus, code) {
            Flow::Next => {
                self.pc = pc.wrapping_add(instr.length() as u16);
                instr.cycles()
            }
            Flow::Taken => instr.cycles() + instr.branch_cycles(),
        };

        self.clock.advance(cycles);
        bus.tick(cycles);
        Ok(cycles)
    }

    /// Cumulative T-cycles consumed since power-on or the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.clock.cycles()
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave HALT/STOP. Called by whatever models interrupts and the joypad.
    pub fn wake(&mut self) {
        self.halted = false;
        self.stopped = false;
    }
}
