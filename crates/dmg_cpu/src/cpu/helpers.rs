use super::table::Flow;
use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_r8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_r8`.
    #[inline]
    pub(super) fn write_r8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// 16-bit register pair by `rp` index: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(super) fn read_rp(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.sp,
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// Immediate byte following the opcode.
    #[inline]
    pub(super) fn imm8(&self, bus: &mut dyn Bus) -> u8 {
        bus.read8(self.pc.wrapping_add(1))
    }

    /// Little-endian immediate word following the opcode.
    #[inline]
    pub(super) fn imm16(&self, bus: &mut dyn Bus) -> u16 {
        bus.read16(self.pc.wrapping_add(1))
    }

    /// Replace the flags selected by `mask` with the corresponding bits of
    /// `flags`, leaving the others as they were.
    #[inline]
    pub(super) fn update_flags(&mut self, mask: Flags, flags: Flags) {
        let kept = self.regs.flags() - mask;
        self.regs.set_flags(kept | (flags & mask));
    }

    /// Branch condition by `cc` index: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.regs.flag(Flags::Z),
            1 => self.regs.flag(Flags::Z),
            2 => !self.regs.flag(Flags::C),
            _ => self.regs.flag(Flags::C),
        }
    }

    /// PUSH: SP drops by two, then the word lands little-endian at SP.
    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        self.sp = self.sp.wrapping_sub(2);
        bus.write16(self.sp, value);
    }

    /// POP: read the word at SP, then SP rises by two.
    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let value = bus.read16(self.sp);
        self.sp = self.sp.wrapping_add(2);
        value
    }

    /// Absolute jump to `target` when `cond` holds.
    #[inline]
    pub(super) fn jump_if(&mut self, cond: bool, target: u16) -> Flow {
        if cond {
            self.pc = target;
            Flow::Taken
        } else {
            Flow::Next
        }
    }

    /// Push the return address `pc + length` and jump to `target`.
    #[inline]
    pub(super) fn call_to(&mut self, bus: &mut dyn Bus, length: u16, target: u16) -> Flow {
        let ret = self.pc.wrapping_add(length);
        self.push_u16(bus, ret);
        self.pc = target;
        Flow::Taken
    }
}
