use crate::cpu::table::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        Flow::Next
    }

    /// HALT parks the CPU until something outside calls `wake`.
    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.halted = true;
        Flow::Next
    }

    /// STOP is two bytes long; the padding byte is skipped, not executed.
    pub(in crate::cpu) fn exec_stop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.stopped = true;
        self.halted = false;
        Flow::Next
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.ime = false;
        Flow::Next
    }

    // TODO: model the one-instruction EI delay once an interrupt controller
    // is attached; without one the delay is unobservable.
    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.ime = true;
        Flow::Next
    }
}
