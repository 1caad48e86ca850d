use crate::cpu::table::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// JR r8 and JR cc,r8.
    ///
    /// The displacement is signed and relative to the address after the
    /// two-byte instruction.
    pub(in crate::cpu) fn exec_jr(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let cond = opcode == 0x18 || self.condition(opcode >> 3);
        let offset = self.imm8(bus) as i8;
        let target = self.pc.wrapping_add(2).wrapping_add(offset as u16);
        self.jump_if(cond, target)
    }

    /// JP a16 and JP cc,a16.
    pub(in crate::cpu) fn exec_jp(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let cond = opcode == 0xC3 || self.condition(opcode >> 3);
        let target = self.imm16(bus);
        self.jump_if(cond, target)
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.pc = self.regs.hl();
        Flow::Taken
    }

    /// CALL a16 and CALL cc,a16. The pushed return address is `pc + 3`.
    pub(in crate::cpu) fn exec_call(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let target = self.imm16(bus);
        if opcode == 0xCD || self.condition(opcode >> 3) {
            self.call_to(bus, 3, target)
        } else {
            Flow::Next
        }
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.pc = self.pop_u16(bus);
        Flow::Taken
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        if self.condition(opcode >> 3) {
            self.pc = self.pop_u16(bus);
            Flow::Taken
        } else {
            Flow::Next
        }
    }

    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Flow {
        self.pc = self.pop_u16(bus);
        self.ime = true;
        Flow::Taken
    }

    /// RST n: call to the fixed vector encoded in bits 5..3.
    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        self.call_to(bus, 1, (opcode & 0x38) as u16)
    }
}
