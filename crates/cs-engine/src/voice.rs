//! Voice: decay state for one tone channel.

/// Volume a freshly triggered voice starts at.
pub const MAX_VOLUME: u8 = 31;

/// Attenuation written when a note starts.
pub const ATTENUATION_FULL: u8 = 0;

/// Attenuation that silences a channel.
pub const ATTENUATION_OFF: u8 = MAX_VOLUME;

/// A single tone channel's envelope.
///
/// There is no note-off: a voice fades by one step per tick from
/// [`MAX_VOLUME`] to zero, and is free once it gets there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Voice {
    /// Current volume (0 = silent, `MAX_VOLUME` = loudest).
    volume: u8,
}

impl Voice {
    /// Create a silent voice.
    pub const fn new() -> Self {
        Self { volume: 0 }
    }

    /// Current volume.
    pub const fn volume(&self) -> u8 {
        self.volume
    }

    /// Whether the voice has faded out and can be reused.
    pub const fn is_free(&self) -> bool {
        self.volume == 0
    }

    /// Attenuation level matching the current volume.
    pub const fn attenuation(&self) -> u8 {
        MAX_VOLUME - self.volume
    }

    /// Step the envelope down by one.
    ///
    /// Returns the attenuation to write for this tick, taken before the
    /// decrement, or `None` if the voice was already silent.
    pub fn decay(&mut self) -> Option<u8> {
        if self.volume == 0 {
            return None;
        }
        let level = self.attenuation();
        self.volume -= 1;
        Some(level)
    }

    /// Restart the envelope at full volume.
    pub fn retrigger(&mut self) {
        self.volume = MAX_VOLUME;
    }

    /// Cut the voice to silence.
    pub fn silence(&mut self) {
        self.volume = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_voice_is_free() {
        let v = Voice::new();
        assert!(v.is_free());
        assert_eq!(v.attenuation(), ATTENUATION_OFF);
    }

    #[test]
    fn retrigger_sets_full_volume() {
        let mut v = Voice::new();
        v.retrigger();
        assert_eq!(v.volume(), MAX_VOLUME);
        assert_eq!(v.attenuation(), ATTENUATION_FULL);
        assert!(!v.is_free());
    }

    #[test]
    fn decay_reports_level_before_decrement() {
        let mut v = Voice::new();
        v.retrigger();
        assert_eq!(v.decay(), Some(0));
        assert_eq!(v.volume(), MAX_VOLUME - 1);
        assert_eq!(v.decay(), Some(1));
    }

    #[test]
    fn decay_reaches_zero_after_max_volume_ticks() {
        let mut v = Voice::new();
        v.retrigger();
        let mut writes = 0;
        while v.decay().is_some() {
            writes += 1;
        }
        assert_eq!(writes, MAX_VOLUME as usize);
        assert!(v.is_free());
    }

    #[test]
    fn silent_voice_does_not_decay() {
        let mut v = Voice::new();
        assert_eq!(v.decay(), None);
        assert_eq!(v.volume(), 0);
    }

    #[test]
    fn silence_frees_voice() {
        let mut v = Voice::new();
        v.retrigger();
        v.silence();
        assert!(v.is_free());
    }
}
