//! Sound chip capability consumed by the sequencer.

/// Register-level interface to a bank of tone generators.
///
/// Implemented by hardware drivers, the software [`Psg`](crate::Psg), and the
/// [`WriteLog`](crate::WriteLog) recorder used in tests.
pub trait SoundChip {
    /// Set the period register of a tone channel.
    fn set_frequency(&mut self, voice: usize, period: u16);
    /// Set the attenuation of a tone channel. Higher is quieter.
    fn set_attenuation(&mut self, voice: usize, level: u8);
}

impl<C: SoundChip + ?Sized> SoundChip for &mut C {
    fn set_frequency(&mut self, voice: usize, period: u16) {
        (**self).set_frequency(voice, period);
    }

    fn set_attenuation(&mut self, voice: usize, level: u8) {
        (**self).set_attenuation(voice, level);
    }
}

/// A single register write issued to a [`SoundChip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChipWrite {
    Frequency { voice: usize, period: u16 },
    Attenuation { voice: usize, level: u8 },
}

impl ChipWrite {
    /// The channel this write targets.
    pub fn voice(&self) -> usize {
        match *self {
            ChipWrite::Frequency { voice, .. } | ChipWrite::Attenuation { voice, .. } => voice,
        }
    }

    /// Replay this write onto a chip.
    pub fn apply<C: SoundChip + ?Sized>(&self, chip: &mut C) {
        match *self {
            ChipWrite::Frequency { voice, period } => chip.set_frequency(voice, period),
            ChipWrite::Attenuation { voice, level } => chip.set_attenuation(voice, level),
        }
    }
}
