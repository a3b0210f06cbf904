//! Fixed-capacity recorder of chip writes.

use heapless::Vec;

use crate::chip::{ChipWrite, SoundChip};

/// A [`SoundChip`] that records every write instead of producing sound.
///
/// Storage is inline, so recording never allocates. Writes past `CAP` are
/// counted but dropped.
#[derive(Clone, Debug, Default)]
pub struct WriteLog<const CAP: usize> {
    writes: Vec<ChipWrite, CAP>,
    dropped: usize,
}

impl<const CAP: usize> WriteLog<CAP> {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { writes: Vec::new(), dropped: 0 }
    }

    /// Recorded writes in issue order.
    pub fn writes(&self) -> &[ChipWrite] {
        &self.writes
    }

    /// Number of writes that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget all recorded writes.
    pub fn clear(&mut self) {
        self.writes.clear();
        self.dropped = 0;
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.dropped == 0
    }

    /// Recorded frequency writes as `(voice, period)`.
    pub fn frequencies(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.writes.iter().filter_map(|w| match *w {
            ChipWrite::Frequency { voice, period } => Some((voice, period)),
            ChipWrite::Attenuation { .. } => None,
        })
    }

    /// Recorded attenuation writes as `(voice, level)`.
    pub fn attenuations(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.writes.iter().filter_map(|w| match *w {
            ChipWrite::Attenuation { voice, level } => Some((voice, level)),
            ChipWrite::Frequency { .. } => None,
        })
    }

    fn record(&mut self, write: ChipWrite) {
        if self.writes.push(write).is_err() {
            self.dropped += 1;
        }
    }
}

impl<const CAP: usize> SoundChip for WriteLog<CAP> {
    fn set_frequency(&mut self, voice: usize, period: u16) {
        self.record(ChipWrite::Frequency { voice, period });
    }

    fn set_attenuation(&mut self, voice: usize, level: u8) {
        self.record(ChipWrite::Attenuation { voice, level });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut log = WriteLog::<8>::new();
        log.set_frequency(1, 4096);
        log.set_attenuation(1, 0);
        assert_eq!(
            log.writes(),
            &[
                ChipWrite::Frequency { voice: 1, period: 4096 },
                ChipWrite::Attenuation { voice: 1, level: 0 },
            ]
        );
    }

    #[test]
    fn overflow_is_counted() {
        let mut log = WriteLog::<2>::new();
        for level in 0..5 {
            log.set_attenuation(0, level);
        }
        assert_eq!(log.writes().len(), 2);
        assert_eq!(log.dropped(), 3);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn filters_by_kind() {
        let mut log = WriteLog::<8>::new();
        log.set_frequency(0, 100);
        log.set_attenuation(2, 7);
        log.set_frequency(1, 200);
        assert_eq!(log.frequencies().collect::<alloc::vec::Vec<_>>(), [(0, 100), (1, 200)]);
        assert_eq!(log.attenuations().collect::<alloc::vec::Vec<_>>(), [(2, 7)]);
    }

    #[test]
    fn replays_onto_another_chip() {
        let mut first = WriteLog::<4>::new();
        first.set_frequency(0, 1824);
        first.set_attenuation(0, 3);
        let mut second = WriteLog::<4>::new();
        for w in first.writes() {
            w.apply(&mut second);
        }
        assert_eq!(first.writes(), second.writes());
    }
}
