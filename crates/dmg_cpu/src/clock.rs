/// DMG master clock frequency in T-cycles per second.
pub const CPU_CLOCK_HZ: u32 = 4_194_304;

/// One DMG video frame worth of T-cycles (154 lines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;

/// Cumulative cycle counter owned by the CPU.
///
/// The clock never schedules anything on its own. Peripherals keep a
/// [`ClockObserver`] and pull the delta since their last look after each
/// `Cpu::step`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Clock {
    cycles: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub(crate) fn advance(&mut self, cycles: u32) {
        self.cycles = self.cycles.wrapping_add(cycles as u64);
    }

    pub(crate) fn reset(&mut self) {
        self.cycles = 0;
    }

    /// An observer positioned at the current cycle count.
    pub fn observer(&self) -> ClockObserver {
        ClockObserver { last: self.cycles }
    }
}

/// Remembers the last cycle count a collaborator has seen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClockObserver {
    last: u64,
}

impl ClockObserver {
    /// Cycles elapsed since the previous call (or since creation), then
    /// catch up to `clock`.
    pub fn take_delta(&mut self, clock: &Clock) -> u64 {
        let delta = clock.cycles.wrapping_sub(self.last);
        self.last = clock.cycles;
        delta
    }

    pub fn last_seen(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_reports_delta_since_last_look() {
        let mut clock = Clock::new();
        clock.advance(4);
        let mut observer = clock.observer();
        assert_eq!(observer.last_seen(), 4);

        clock.advance(12);
        clock.advance(8);
        assert_eq!(observer.take_delta(&clock), 20);
        assert_eq!(observer.take_delta(&clock), 0);

        clock.advance(24);
        assert_eq!(observer.take_delta(&clock), 24);
        assert_eq!(clock.cycles(), 48);
    }

    #[test]
    fn independent_observers_do_not_interfere() {
        let mut clock = Clock::new();
        let mut ppu = clock.observer();
        let mut timer = clock.observer();

        clock.advance(16);
        assert_eq!(ppu.take_delta(&clock), 16);
        clock.advance(4);
        assert_eq!(timer.take_delta(&clock), 20);
        assert_eq!(ppu.take_delta(&clock), 4);
    }
}
