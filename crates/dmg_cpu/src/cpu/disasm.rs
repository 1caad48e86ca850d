use super::{table, Bus};
use crate::error::Opcode;

/// Disassemble the instruction at `addr`, returning its text and length.
///
/// Operand placeholders in the table's mnemonic are replaced with the bytes
/// that follow the opcode. Opcodes without a table entry come back as a
/// `DB` directive of length 1.
///
/// Operands are fetched through `bus.read8`, so buses with read side effects
/// will see them.
pub fn disassemble<B: Bus + ?Sized>(bus: &mut B, addr: u16) -> (String, u8) {
    let opcode = match bus.read8(addr) {
        0xCB => Opcode::Prefixed(bus.read8(addr.wrapping_add(1))),
        op => Opcode::Primary(op),
    };

    let Some(instr) = table::instruction(opcode) else {
        let byte = match opcode {
            Opcode::Primary(op) | Opcode::Prefixed(op) => op,
        };
        return (format!("DB ${byte:02X}"), 1);
    };

    let operand = addr.wrapping_add(1);
    let mnemonic = instr.mnemonic();
    let text = if mnemonic.contains("d16") || mnemonic.contains("a16") {
        let word = bus.read16(operand);
        mnemonic
            .replace("d16", &format!("${word:04X}"))
            .replace("a16", &format!("${word:04X}"))
    } else if mnemonic.contains("d8") {
        let byte = bus.read8(operand);
        mnemonic.replace("d8", &format!("${byte:02X}"))
    } else if mnemonic.contains("a8") {
        let byte = bus.read8(operand);
        mnemonic.replace("a8", &format!("$FF{byte:02X}"))
    } else if mnemonic.starts_with("JR") {
        let offset = bus.read8(operand) as i8;
        let target = addr.wrapping_add(2).wrapping_add(offset as u16);
        mnemonic.replace("r8", &format!("${target:04X}"))
    } else if mnemonic.contains("r8") {
        let offset = bus.read8(operand) as i8;
        let sign = if offset < 0 { '-' } else { '+' };
        mnemonic
            .replace("+r8", "r8")
            .replace("r8", &format!("{sign}{}", offset.unsigned_abs()))
    } else {
        mnemonic.to_string()
    };

    (text, instr.length())
}
