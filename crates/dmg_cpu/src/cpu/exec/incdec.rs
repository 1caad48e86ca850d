use crate::cpu::alu;
use crate::cpu::table::Flow;
use crate::cpu::{Bus, Cpu, Flags};

/// Flags INC/DEC define; C is left alone.
const INC_DEC_MASK: Flags = Flags::Z.union(Flags::N).union(Flags::H);

impl Cpu {
    pub(in crate::cpu) fn exec_inc8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let reg = opcode >> 3;
        let (result, flags) = alu::inc8(self.read_r8(bus, reg));
        self.write_r8(bus, reg, result);
        self.update_flags(INC_DEC_MASK, flags);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_dec8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let reg = opcode >> 3;
        let (result, flags) = alu::dec8(self.read_r8(bus, reg));
        self.write_r8(bus, reg, result);
        self.update_flags(INC_DEC_MASK, flags);
        Flow::Next
    }

    /// INC rr never touches flags.
    pub(in crate::cpu) fn exec_inc16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Flow {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_dec16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Flow {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        Flow::Next
    }
}
