//! VoiceBank: fixed-size voice allocation and decay.

use crate::chip::SoundChip;
use crate::frequency::note_period;
use crate::voice::{Voice, ATTENUATION_FULL, ATTENUATION_OFF};

/// Identifier for a tone channel.
pub type VoiceId = usize;

/// Tone channels on the target chip.
pub const DEFAULT_VOICES: usize = 3;

/// The chip's tone channels and their envelopes.
///
/// Allocation is "last free wins": each decay pass remembers the highest
/// numbered silent voice, and note bursts are handed out downwards from there
/// with wraparound. If nothing is silent the previous candidate stands.
#[derive(Clone, Debug)]
pub struct VoiceBank<const N: usize = DEFAULT_VOICES> {
    voices: [Voice; N],
    /// Free-channel candidate from the latest decay pass.
    free: VoiceId,
}

impl<const N: usize> VoiceBank<N> {
    const NONEMPTY: () = assert!(N > 0, "a voice bank needs at least one voice");

    /// Create a bank with every voice silent.
    pub const fn new() -> Self {
        let () = Self::NONEMPTY;
        Self { voices: [Voice::new(); N], free: 0 }
    }

    /// Fade every sounding voice by one step.
    ///
    /// Writes the attenuation for each voice with volume > 0, then decrements
    /// it. Silent voices get no write. Returns the free-channel candidate.
    pub fn decay_all<C: SoundChip + ?Sized>(&mut self, chip: &mut C) -> VoiceId {
        for (id, voice) in self.voices.iter_mut().enumerate() {
            match voice.decay() {
                Some(level) => chip.set_attenuation(id, level),
                None => self.free = id,
            }
        }
        self.free
    }

    /// Start a note on a voice at full volume.
    ///
    /// Voices outside the bank are ignored.
    pub fn trigger<C: SoundChip + ?Sized>(&mut self, id: VoiceId, note: u8, chip: &mut C) {
        if let Some(voice) = self.voices.get_mut(id) {
            chip.set_frequency(id, note_period(note));
            chip.set_attenuation(id, ATTENUATION_FULL);
            voice.retrigger();
        }
    }

    /// The voice a burst moves to after `id`: one down, wrapping to the top.
    pub const fn previous(id: VoiceId) -> VoiceId {
        if id == 0 {
            N - 1
        } else {
            id - 1
        }
    }

    /// Silence every voice on the chip and in the bank.
    pub fn silence_all<C: SoundChip + ?Sized>(&mut self, chip: &mut C) {
        for (id, voice) in self.voices.iter_mut().enumerate() {
            chip.set_attenuation(id, ATTENUATION_OFF);
            voice.silence();
        }
    }

    /// Return to the power-on state without touching the chip.
    pub fn reset(&mut self) {
        self.voices = [Voice::new(); N];
        self.free = 0;
    }

    /// Get a voice by ID.
    pub fn voice(&self, id: VoiceId) -> Option<&Voice> {
        self.voices.get(id)
    }

    /// Current volume of every voice, in channel order.
    pub fn volumes(&self) -> [u8; N] {
        let mut out = [0; N];
        for (slot, voice) in out.iter_mut().zip(&self.voices) {
            *slot = voice.volume();
        }
        out
    }

    /// Returns true if every voice has faded out.
    pub fn is_silent(&self) -> bool {
        self.voices.iter().all(Voice::is_free)
    }
}

impl<const N: usize> Default for VoiceBank<N> {
    fn default() -> Self {
        Self::new()
    }
}
