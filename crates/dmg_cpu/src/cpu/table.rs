//! Data-driven dispatch tables for the primary and 0xCB-prefixed opcodes.
//!
//! Each slot holds the encoded length, the base cycle cost, the extra cost
//! paid when a conditional branch is taken, and the handler. Empty slots are
//! opcodes the CPU does not implement (the LR35902 "holes").

use std::borrow::Cow;
use std::fmt;

use lazy_static::lazy_static;

use super::{Bus, Cpu};
use crate::error::Opcode;

/// How a handler left the program counter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    /// Fall through: the step advances PC by the instruction length and
    /// charges the base cost. Conditional branches that are not taken end
    /// up here too.
    Next,
    /// The handler wrote PC itself; the base cost plus the branch cost is
    /// charged.
    Taken,
}

/// Handlers receive the opcode byte (or the byte after 0xCB) while PC still
/// points at the first byte of the instruction.
pub(crate) type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> Flow;

#[derive(Clone)]
pub struct Instruction {
    mnemonic: Cow<'static, str>,
    length: u8,
    cycles: u32,
    branch_cycles: u32,
    pub(crate) handler: Handler,
}

impl Instruction {
    /// Assembly template; operands still to be filled in appear as `d8`,
    /// `d16`, `a8`, `a16` or `r8`.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Encoded length in bytes, including the 0xCB prefix.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// T-cycles when the instruction falls through.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Additional T-cycles when a conditional branch is taken.
    pub fn branch_cycles(&self) -> u32 {
        self.branch_cycles
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .field("cycles", &self.cycles)
            .field("branch_cycles", &self.branch_cycles)
            .finish_non_exhaustive()
    }
}

type Table = [Option<Instruction>; 256];

lazy_static! {
    static ref PRIMARY: Table = build_primary();
    static ref EXTENDED: Table = build_extended();
}

/// Look up the table entry for `opcode`.
///
/// `Opcode::Primary(0xCB)` is the prefix byte, not an instruction, and has no
/// entry.
pub fn instruction(opcode: Opcode) -> Option<&'static Instruction> {
    match opcode {
        Opcode::Primary(op) => PRIMARY[op as usize].as_ref(),
        Opcode::Prefixed(op) => EXTENDED[op as usize].as_ref(),
    }
}

/// Every opcode that has a table entry, primary table first.
pub fn implemented_opcodes() -> impl Iterator<Item = Opcode> {
    let primary = (0..=0xFFu8)
        .map(Opcode::Primary)
        .filter(|&op| instruction(op).is_some());
    let prefixed = (0..=0xFFu8)
        .map(Opcode::Prefixed)
        .filter(|&op| instruction(op).is_some());
    primary.chain(prefixed)
}

/// Operand names in standard LR35902 encoding order.
const R8_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const RP_NAMES: [&str; 4] = ["BC", "DE", "HL", "SP"];
const RP2_NAMES: [&str; 4] = ["BC", "DE", "HL", "AF"];
const CC_NAMES: [&str; 4] = ["NZ", "Z", "NC", "C"];
const ALU_NAMES: [&str; 8] = [
    "ADD A,", "ADC A,", "SUB ", "SBC A,", "AND ", "XOR ", "OR ", "CP ",
];
const SHIFT_NAMES: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

struct TableBuilder {
    slots: Table,
}

impl TableBuilder {
    fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    fn op(
        &mut self,
        opcode: u8,
        mnemonic: impl Into<Cow<'static, str>>,
        length: u8,
        cycles: u32,
        handler: Handler,
    ) -> &mut Self {
        self.branch(opcode, mnemonic, length, cycles, 0, handler)
    }

    fn branch(
        &mut self,
        opcode: u8,
        mnemonic: impl Into<Cow<'static, str>>,
        length: u8,
        cycles: u32,
        branch_cycles: u32,
        handler: Handler,
    ) -> &mut Self {
        let slot = &mut self.slots[opcode as usize];
        debug_assert!(slot.is_none(), "opcode 0x{opcode:02X} registered twice");
        *slot = Some(Instruction {
            mnemonic: mnemonic.into(),
            length,
            cycles,
            branch_cycles,
            handler,
        });
        self
    }

    fn finish(self) -> Table {
        self.slots
    }
}

/// Cycle cost of an 8-bit operand access: `(HL)` costs one extra memory
/// cycle (or two for read-modify-write forms).
#[inline]
fn r8_cost(index: u8, reg: u32, hl: u32) -> u32 {
    if index == 6 {
        hl
    } else {
        reg
    }
}

fn build_primary() -> Table {
    let mut t = TableBuilder::new();

    t.op(0x00, "NOP", 1, 4, Cpu::exec_nop)
        .op(0x08, "LD (a16),SP", 3, 20, Cpu::exec_ld_a16_sp)
        .op(0x10, "STOP", 2, 4, Cpu::exec_stop)
        .op(0x07, "RLCA", 1, 4, Cpu::exec_rotate_a)
        .op(0x0F, "RRCA", 1, 4, Cpu::exec_rotate_a)
        .op(0x17, "RLA", 1, 4, Cpu::exec_rotate_a)
        .op(0x1F, "RRA", 1, 4, Cpu::exec_rotate_a)
        .op(0x27, "DAA", 1, 4, Cpu::exec_daa)
        .op(0x2F, "CPL", 1, 4, Cpu::exec_cpl)
        .op(0x37, "SCF", 1, 4, Cpu::exec_scf)
        .op(0x3F, "CCF", 1, 4, Cpu::exec_ccf)
        .op(0x76, "HALT", 1, 4, Cpu::exec_halt)
        .op(0xF3, "DI", 1, 4, Cpu::exec_di)
        .op(0xFB, "EI", 1, 4, Cpu::exec_ei);

    // 16-bit register groups: LD rr,d16 / INC rr / DEC rr / ADD HL,rr.
    for (p, rp) in RP_NAMES.iter().enumerate() {
        let base = (p as u8) << 4;
        t.op(base | 0x01, format!("LD {rp},d16"), 3, 12, Cpu::exec_ld_rr_d16)
            .op(base | 0x03, format!("INC {rp}"), 1, 8, Cpu::exec_inc16)
            .op(base | 0x0B, format!("DEC {rp}"), 1, 8, Cpu::exec_dec16)
            .op(base | 0x09, format!("ADD HL,{rp}"), 1, 8, Cpu::exec_add_hl_rr);
    }

    // Accumulator through (BC), (DE), (HL+), (HL-).
    for (p, ptr) in ["(BC)", "(DE)", "(HL+)", "(HL-)"].iter().enumerate() {
        let base = (p as u8) << 4;
        t.op(base | 0x02, format!("LD {ptr},A"), 1, 8, Cpu::exec_ld_indirect_a)
            .op(base | 0x0A, format!("LD A,{ptr}"), 1, 8, Cpu::exec_ld_a_indirect);
    }

    // INC r / DEC r / LD r,d8.
    for (y, r) in R8_NAMES.iter().enumerate() {
        let y = y as u8;
        let base = y << 3;
        t.op(base | 0x04, format!("INC {r}"), 1, r8_cost(y, 4, 12), Cpu::exec_inc8)
            .op(base | 0x05, format!("DEC {r}"), 1, r8_cost(y, 4, 12), Cpu::exec_dec8)
            .op(base | 0x06, format!("LD {r},d8"), 2, r8_cost(y, 8, 12), Cpu::exec_ld_r_d8);
    }

    // Relative jumps.
    t.op(0x18, "JR r8", 2, 12, Cpu::exec_jr);
    for (cc, name) in CC_NAMES.iter().enumerate() {
        let cc = cc as u8;
        t.branch(0x20 | (cc << 3), format!("JR {name},r8"), 2, 8, 4, Cpu::exec_jr);
    }

    // LD r,r' (0x40..=0x7F); 0x76 is HALT.
    for opcode in 0x40..=0x7Fu8 {
        if opcode == 0x76 {
            continue;
        }
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let cycles = if dst == 6 || src == 6 { 8 } else { 4 };
        t.op(
            opcode,
            format!("LD {},{}", R8_NAMES[dst as usize], R8_NAMES[src as usize]),
            1,
            cycles,
            Cpu::exec_ld_r_r,
        );
    }

    // 8-bit ALU on A: register forms and immediate forms.
    for (op, name) in ALU_NAMES.iter().enumerate() {
        let op = op as u8;
        for (z, r) in R8_NAMES.iter().enumerate() {
            let z = z as u8;
            t.op(0x80 | (op << 3) | z, format!("{name}{r}"), 1, r8_cost(z, 4, 8), Cpu::exec_alu_r);
        }
        t.op(0xC6 | (op << 3), format!("{name}d8"), 2, 8, Cpu::exec_alu_d8);
    }

    // Conditional control flow.
    for (cc, name) in CC_NAMES.iter().enumerate() {
        let base = (cc as u8) << 3;
        t.branch(0xC0 | base, format!("RET {name}"), 1, 8, 12, Cpu::exec_ret_cc)
            .branch(0xC2 | base, format!("JP {name},a16"), 3, 12, 4, Cpu::exec_jp)
            .branch(0xC4 | base, format!("CALL {name},a16"), 3, 12, 12, Cpu::exec_call);
    }

    t.op(0xC3, "JP a16", 3, 16, Cpu::exec_jp)
        .op(0xE9, "JP (HL)", 1, 4, Cpu::exec_jp_hl)
        .op(0xCD, "CALL a16", 3, 24, Cpu::exec_call)
        .op(0xC9, "RET", 1, 16, Cpu::exec_ret)
        .op(0xD9, "RETI", 1, 16, Cpu::exec_reti);

    // Stack.
    for (p, rp) in RP2_NAMES.iter().enumerate() {
        let base = (p as u8) << 4;
        t.op(0xC1 | base, format!("POP {rp}"), 1, 12, Cpu::exec_pop)
            .op(0xC5 | base, format!("PUSH {rp}"), 1, 16, Cpu::exec_push);
    }
    for n in 0..8u8 {
        let vector = n << 3;
        t.op(0xC7 | vector, format!("RST {vector:02X}H"), 1, 16, Cpu::exec_rst);
    }

    // High-page, absolute and SP-relative loads.
    t.op(0xE0, "LDH (a8),A", 2, 12, Cpu::exec_ldh_a8)
        .op(0xF0, "LDH A,(a8)", 2, 12, Cpu::exec_ldh_a8)
        .op(0xE2, "LD (C),A", 1, 8, Cpu::exec_ldh_c)
        .op(0xF2, "LD A,(C)", 1, 8, Cpu::exec_ldh_c)
        .op(0xEA, "LD (a16),A", 3, 16, Cpu::exec_ld_a16_a)
        .op(0xFA, "LD A,(a16)", 3, 16, Cpu::exec_ld_a16_a)
        .op(0xE8, "ADD SP,r8", 2, 16, Cpu::exec_add_sp_r8)
        .op(0xF8, "LD HL,SP+r8", 2, 12, Cpu::exec_ld_hl_sp_r8)
        .op(0xF9, "LD SP,HL", 1, 8, Cpu::exec_ld_sp_hl);

    t.finish()
}

fn build_extended() -> Table {
    let mut t = TableBuilder::new();

    for sub in 0..=0xFFu8 {
        let x = sub >> 6;
        let y = (sub >> 3) & 0x07;
        let z = sub & 0x07;
        let r = R8_NAMES[z as usize];

        match x {
            0 => t.op(
                sub,
                format!("{} {r}", SHIFT_NAMES[y as usize]),
                2,
                r8_cost(z, 8, 16),
                Cpu::exec_cb_shift,
            ),
            1 => t.op(sub, format!("BIT {y},{r}"), 2, r8_cost(z, 8, 12), Cpu::exec_cb_bit),
            2 => t.op(sub, format!("RES {y},{r}"), 2, r8_cost(z, 8, 16), Cpu::exec_cb_res),
            _ => t.op(sub, format!("SET {y},{r}"), 2, r8_cost(z, 8, 16), Cpu::exec_cb_set),
        };
    }

    t.finish()
}
