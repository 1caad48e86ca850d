use crate::cpu::table::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.imm16(bus);
        self.write_rp(opcode >> 4, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let value = self.imm8(bus);
        self.write_r8(bus, opcode >> 3, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let value = self.read_r8(bus, opcode);
        self.write_r8(bus, opcode >> 3, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Flow {
        let addr = self.imm16(bus);
        bus.write16(addr, self.sp);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.sp = self.regs.hl();
        Flow::Next
    }

    /// Address behind (BC), (DE), (HL+) or (HL-), applying the HL post step.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        Flow::Next
    }

    /// LDH (a8),A and LDH A,(a8): high page 0xFF00 + immediate.
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let addr = 0xFF00 | self.imm8(bus) as u16;
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        Flow::Next
    }

    /// LD (C),A and LD A,(C): high page 0xFF00 + C.
    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let addr = 0xFF00 | self.regs.c as u16;
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let addr = self.imm16(bus);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        Flow::Next
    }
}
