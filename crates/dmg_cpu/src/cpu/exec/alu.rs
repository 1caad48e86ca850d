use crate::cpu::alu::{self, Shift};
use crate::cpu::table::Flow;
use crate::cpu::{Bus, Cpu, Flags};

impl Cpu {
    /// Apply ALU operation `op` (ADD, ADC, SUB, SBC, AND, XOR, OR, CP) to A.
    fn alu_a(&mut self, op: u8, value: u8) {
        let a = self.regs.a;
        let carry = self.regs.flag(Flags::C);
        let (result, flags) = match op & 0x07 {
            0 => alu::add8(a, value, false),
            1 => alu::add8(a, value, carry),
            2 => alu::sub8(a, value, false),
            3 => alu::sub8(a, value, carry),
            4 => alu::and8(a, value),
            5 => alu::xor8(a, value),
            6 => alu::or8(a, value),
            _ => {
                // CP: flags of the subtraction, A untouched.
                let (_, flags) = alu::sub8(a, value, false);
                (a, flags)
            }
        };
        self.regs.a = result;
        self.regs.set_flags(flags);
    }

    pub(in crate::cpu) fn exec_alu_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let value = self.read_r8(bus, opcode);
        self.alu_a(opcode >> 3, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_alu_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(opcode & 0xC7 == 0xC6);

        let value = self.imm8(bus);
        self.alu_a(opcode >> 3, value);
        Flow::Next
    }

    /// RLCA, RRCA, RLA, RRA. Unlike the 0xCB forms, Z is always cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let kind = Shift::from_index(opcode >> 3);
        let (result, flags) = alu::shift(kind, self.regs.a, self.regs.flag(Flags::C));
        self.regs.a = result;
        self.regs.set_flags(flags & Flags::C);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Flow {
        let (result, flags) = alu::add16(self.regs.hl(), self.read_rp(opcode >> 4));
        self.regs.set_hl(result);
        self.update_flags(Flags::N | Flags::H | Flags::C, flags);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Flow {
        let (result, flags) = alu::add16_signed(self.sp, self.imm8(bus));
        self.sp = result;
        self.regs.set_flags(flags);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Flow {
        let (result, flags) = alu::add16_signed(self.sp, self.imm8(bus));
        self.regs.set_hl(result);
        self.regs.set_flags(flags);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        let (result, flags) = alu::daa(self.regs.a, self.regs.flags());
        self.regs.a = result;
        self.regs.set_flags(flags);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.regs.a = !self.regs.a;
        self.update_flags(Flags::N | Flags::H, Flags::N | Flags::H);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.update_flags(Flags::N | Flags::H | Flags::C, Flags::C);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        let carry = if self.regs.flag(Flags::C) {
            Flags::empty()
        } else {
            Flags::C
        };
        self.update_flags(Flags::N | Flags::H | Flags::C, carry);
        Flow::Next
    }
}
