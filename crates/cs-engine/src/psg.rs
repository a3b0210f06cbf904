//! Software square-wave tone generator.

use crate::chip::SoundChip;
use crate::frequency::period_to_increment;
use crate::voice::ATTENUATION_OFF;
use crate::voice_bank::DEFAULT_VOICES;

/// Output amplitude per 2 dB attenuation step. The last step is silence.
const AMPLITUDE: [i16; 16] = [
    8191, 6506, 5168, 4105, 3261, 2590, 2057, 1634, 1298, 1031, 819, 650, 516, 410, 326, 0,
];

/// Amplitude for an attenuation level (0 = loudest).
pub fn attenuation_amplitude(level: u8) -> i16 {
    AMPLITUDE[usize::from(level >> 1).min(AMPLITUDE.len() - 1)]
}

/// Register state for one tone channel.
#[derive(Clone, Copy, Debug, Default)]
struct Tone {
    attenuation: u8,
    /// 16.16 fixed-point phase; one cycle is 1 << 16.
    phase: u32,
    increment: u32,
}

impl Tone {
    const SILENT: Self = Self { attenuation: ATTENUATION_OFF, phase: 0, increment: 0 };

    #[inline]
    fn next(&mut self) -> i32 {
        if self.increment == 0 {
            return 0;
        }
        let amp = attenuation_amplitude(self.attenuation) as i32;
        let out = if self.phase & 0x8000 == 0 { amp } else { -amp };
        self.phase = self.phase.wrapping_add(self.increment);
        out
    }
}

/// A programmable sound generator with `N` square-wave tone channels.
///
/// Stands in for the hardware chip on desktop hosts: the sequencer writes
/// registers through [`SoundChip`] and the host pulls mono samples out.
#[derive(Clone, Debug)]
pub struct Psg<const N: usize = DEFAULT_VOICES> {
    tones: [Tone; N],
    sample_rate: u32,
}

impl<const N: usize> Psg<N> {
    /// Create a chip rendering at `sample_rate` with every channel silent.
    pub fn new(sample_rate: u32) -> Self {
        Self { tones: [Tone::SILENT; N], sample_rate }
    }

    /// Returns true if no channel can currently be heard.
    pub fn is_silent(&self) -> bool {
        self.tones
            .iter()
            .all(|t| t.increment == 0 || attenuation_amplitude(t.attenuation) == 0)
    }

    /// Produce the next output sample, mixing all channels.
    pub fn render_sample(&mut self) -> i16 {
        let mut mix: i32 = 0;
        for tone in &mut self.tones {
            mix += tone.next();
        }
        mix.clamp(i16::MIN as i32, i16::MAX as i32) as i16
    }
}

impl<const N: usize> SoundChip for Psg<N> {
    fn set_frequency(&mut self, voice: usize, period: u16) {
        if let Some(tone) = self.tones.get_mut(voice) {
            tone.increment = period_to_increment(period, self.sample_rate);
        }
    }

    fn set_attenuation(&mut self, voice: usize, level: u8) {
        if let Some(tone) = self.tones.get_mut(voice) {
            tone.attenuation = level;
        }
    }
}
