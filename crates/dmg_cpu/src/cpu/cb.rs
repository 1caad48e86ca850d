use super::alu::{self, Shift};
use super::table::Flow;
use super::{Bus, Cpu, Flags};

/// CB-prefixed handlers. `sub` is the byte after 0xCB, laid out as
/// `xx yyy zzz`: x selects the group, y the shift kind or bit index, z the
/// operand register.
impl Cpu {
    /// RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL on r or (HL).
    pub(super) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, sub: u8) -> Flow {
        let kind = Shift::from_index(sub >> 3);
        let value = self.read_r8(bus, sub);
        let (result, flags) = alu::shift(kind, value, self.regs.flag(Flags::C));
        self.write_r8(bus, sub, result);
        self.regs.set_flags(flags);
        Flow::Next
    }

    /// BIT b,r: Z from the tested bit, N=0, H=1, C preserved.
    pub(super) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, sub: u8) -> Flow {
        let value = self.read_r8(bus, sub);
        let flags = alu::bit(sub >> 3, value);
        self.update_flags(Flags::Z | Flags::N | Flags::H, flags);
        Flow::Next
    }

    pub(super) fn exec_cb_res(&mut self, bus: &mut dyn Bus, sub: u8) -> Flow {
        let mask = 1u8 << ((sub >> 3) & 0x07);
        let value = self.read_r8(bus, sub);
        self.write_r8(bus, sub, value & !mask);
        Flow::Next
    }

    pub(super) fn exec_cb_set(&mut self, bus: &mut dyn Bus, sub: u8) -> Flow {
        let mask = 1u8 << ((sub >> 3) & 0x07);
        let value = self.read_r8(bus, sub);
        self.write_r8(bus, sub, value | mask);
        Flow::Next
    }
}
