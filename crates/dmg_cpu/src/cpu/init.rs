use super::{Cpu, Registers};

impl Cpu {
    /// Power-on state: every register zero, `pc = 0`, `sp = 0`, no cycles.
    ///
    /// This is where a boot ROM expects to start. To begin directly at the
    /// cartridge entry point instead, follow up with
    /// [`Cpu::apply_post_boot_state`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the power-on state, including the cycle counter.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.pc = 0;
        self.sp = 0;
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.clock.reset();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100.
    ///
    /// Values follow Pan Docs for DMG. IME is clear at that point; the
    /// program enables interrupts itself.
    pub fn apply_post_boot_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.sp = 0xFFFE;
        self.pc = 0x0100;
        self.ime = false;
    }
}
