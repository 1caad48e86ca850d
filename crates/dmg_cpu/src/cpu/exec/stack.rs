use crate::cpu::table::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Pair by `rp2` index: 0=BC, 1=DE, 2=HL, 3=AF.
    fn read_rp2(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        }
    }

    fn write_rp2(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            // set_af drops the low nibble of F.
            _ => self.regs.set_af(value),
        }
    }

    pub(in crate::cpu) fn exec_push(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = self.read_rp2(opcode >> 4);
        self.push_u16(bus, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_pop(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        self.write_rp2(opcode >> 4, value);
        Flow::Next
    }
}
