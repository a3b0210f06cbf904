//! Tick timing.

/// Rate at which the host calls the sequencer, in ticks per second.
///
/// One tick per displayed frame, so the usual values are the video refresh
/// rates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickRate(pub u32);

impl TickRate {
    /// 60 Hz vertical blank.
    pub const NTSC: TickRate = TickRate(60);
    /// 50 Hz vertical blank.
    pub const PAL: TickRate = TickRate(50);

    /// Ticks per second.
    pub const fn hz(self) -> u32 {
        self.0
    }

    /// Whole milliseconds spanned by `ticks`. Zero for a zero rate.
    pub const fn ticks_to_millis(self, ticks: u64) -> u64 {
        if self.0 == 0 {
            return 0;
        }
        ticks * 1000 / self.0 as u64
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::NTSC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntsc_second() {
        assert_eq!(TickRate::NTSC.ticks_to_millis(60), 1000);
    }

    #[test]
    fn pal_frame_is_twenty_millis() {
        assert_eq!(TickRate::PAL.ticks_to_millis(1), 20);
    }

    #[test]
    fn zero_rate_gives_zero() {
        assert_eq!(TickRate(0).ticks_to_millis(1000), 0);
    }
}
