//! 8/16-bit arithmetic with LR35902 flag derivation.
//!
//! Every function is pure: it returns the result together with the flags it
//! defines. Callers that leave some flags untouched (INC/DEC keep C, ADD HL
//! keeps Z) merge the returned flags into F themselves.

use super::Flags;

#[inline]
fn zero(result: u8) -> Flags {
    if result == 0 {
        Flags::Z
    } else {
        Flags::empty()
    }
}

/// ADD/ADC. `carry` is the incoming carry for ADC, false for ADD.
pub(crate) fn add8(a: u8, value: u8, carry: bool) -> (u8, Flags) {
    let carry = u8::from(carry);
    let full = a as u16 + value as u16 + carry as u16;
    let result = full as u8;

    let mut flags = zero(result);
    flags.set(Flags::H, (a & 0x0F) + (value & 0x0F) + carry > 0x0F);
    flags.set(Flags::C, full > 0xFF);
    (result, flags)
}

/// SUB/SBC/CP. `borrow` is the incoming carry for SBC, false otherwise.
///
/// H is set when the low nibble of `value` plus the borrow exceeds the low
/// nibble of `a`; C when `value` plus the borrow exceeds `a`.
pub(crate) fn sub8(a: u8, value: u8, borrow: bool) -> (u8, Flags) {
    let borrow = u8::from(borrow);
    let result = a.wrapping_sub(value).wrapping_sub(borrow);

    let mut flags = zero(result) | Flags::N;
    flags.set(Flags::H, (value & 0x0F) + borrow > (a & 0x0F));
    flags.set(Flags::C, value as u16 + borrow as u16 > a as u16);
    (result, flags)
}

pub(crate) fn and8(a: u8, value: u8) -> (u8, Flags) {
    let result = a & value;
    // H is always set by AND on this CPU.
    (result, zero(result) | Flags::H)
}

pub(crate) fn or8(a: u8, value: u8) -> (u8, Flags) {
    let result = a | value;
    (result, zero(result))
}

pub(crate) fn xor8(a: u8, value: u8) -> (u8, Flags) {
    let result = a ^ value;
    (result, zero(result))
}

/// INC r. Only Z, N and H are defined; C must be preserved by the caller.
pub(crate) fn inc8(value: u8) -> (u8, Flags) {
    let result = value.wrapping_add(1);
    let mut flags = zero(result);
    flags.set(Flags::H, result & 0x0F == 0);
    (result, flags)
}

/// DEC r. Only Z, N and H are defined; C must be preserved by the caller.
pub(crate) fn dec8(value: u8) -> (u8, Flags) {
    let result = value.wrapping_sub(1);
    let mut flags = zero(result) | Flags::N;
    flags.set(Flags::H, result & 0x0F == 0x0F);
    (result, flags)
}

/// ADD HL,rr. Returns H and C only; Z is preserved and N cleared by the caller.
pub(crate) fn add16(hl: u16, value: u16) -> (u16, Flags) {
    let mut flags = Flags::empty();
    flags.set(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
    flags.set(Flags::C, hl as u32 + value as u32 > 0xFFFF);
    (hl.wrapping_add(value), flags)
}

/// SP plus a signed 8-bit displacement (ADD SP,r8 and LD HL,SP+r8).
///
/// Z and N are cleared; H and C come from the unsigned low-byte addition.
pub(crate) fn add16_signed(base: u16, imm8: u8) -> (u16, Flags) {
    let offset = imm8 as i8 as i16 as u16;
    let mut flags = Flags::empty();
    flags.set(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
    flags.set(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
    (base.wrapping_add(offset), flags)
}

/// Decimal adjust after a BCD addition or subtraction. N passes through.
pub(crate) fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut adjust = 0u8;
    let mut carry = flags.contains(Flags::C);

    if flags.contains(Flags::H) || (!flags.contains(Flags::N) && a & 0x0F > 0x09) {
        adjust |= 0x06;
    }
    if carry || (!flags.contains(Flags::N) && a > 0x99) {
        adjust |= 0x60;
        carry = true;
    }

    let result = if flags.contains(Flags::N) {
        a.wrapping_sub(adjust)
    } else {
        a.wrapping_add(adjust)
    };

    let mut out = zero(result) | (flags & Flags::N);
    out.set(Flags::C, carry);
    (result, out)
}

/// Shift/rotate kinds shared by the accumulator forms and the 0xCB group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Shift {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl Shift {
    pub(crate) fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Shift::Rlc,
            1 => Shift::Rrc,
            2 => Shift::Rl,
            3 => Shift::Rr,
            4 => Shift::Sla,
            5 => Shift::Sra,
            6 => Shift::Swap,
            _ => Shift::Srl,
        }
    }
}

/// Apply `kind` to `value` with incoming carry `carry`.
///
/// Z reflects the 8-bit result, N and H are cleared and C receives the bit
/// shifted out (SWAP clears it).
pub(crate) fn shift(kind: Shift, value: u8, carry: bool) -> (u8, Flags) {
    let carry_in = u8::from(carry);
    let (result, carry_out) = match kind {
        Shift::Rlc => (value.rotate_left(1), value & 0x80 != 0),
        Shift::Rrc => (value.rotate_right(1), value & 0x01 != 0),
        Shift::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
        Shift::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
        Shift::Sla => (value << 1, value & 0x80 != 0),
        Shift::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
        Shift::Swap => (value.rotate_left(4), false),
        Shift::Srl => (value >> 1, value & 0x01 != 0),
    };

    let mut flags = zero(result);
    flags.set(Flags::C, carry_out);
    (result, flags)
}

/// BIT b,r. Returns Z, N and H; C must be preserved by the caller.
pub(crate) fn bit(index: u8, value: u8) -> Flags {
    let set = value & (1 << (index & 0x07)) != 0;
    if set {
        Flags::H
    } else {
        Flags::Z | Flags::H
    }
}
