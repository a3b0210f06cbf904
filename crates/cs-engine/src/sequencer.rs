//! Sequencer: the per-tick song interpreter.
//!
//! Each call to [`Sequencer::update`] is one host tick (usually a video
//! frame). The tick always decays sounding voices first. When the current
//! duration has run out, it then decodes a burst: any number of notes,
//! each on its own voice, closed by a rest that sets the next wait.

use cs_ir::{Command, Cursor};
use log::{debug, trace};

use crate::chip::SoundChip;
use crate::voice_bank::{VoiceBank, DEFAULT_VOICES};

/// Where the sequencer is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    /// No song loaded, or the last one ended.
    Idle,
    /// Waiting out a duration before the next burst.
    Armed,
    /// A burst will be decoded on the next tick.
    Decoding,
}

/// Plays one song at a time on an `N`-voice chip.
///
/// The song is borrowed for as long as it plays. Nothing here allocates, so
/// `update` is safe to call from an interrupt or an audio callback.
#[derive(Clone, Debug)]
pub struct Sequencer<'a, const N: usize = DEFAULT_VOICES> {
    cursor: Option<Cursor<'a>>,
    /// Ticks left before the next burst. Zero forces a decode.
    duration: u8,
    bank: VoiceBank<N>,
}

impl<'a, const N: usize> Sequencer<'a, N> {
    /// Create an idle sequencer with every voice silent.
    pub const fn new() -> Self {
        Self { cursor: None, duration: 0, bank: VoiceBank::new() }
    }

    /// Begin playing `song` from its first byte.
    ///
    /// Replaces any song already playing. Sounding voices are left to fade.
    pub fn start(&mut self, song: &'a [u8]) {
        self.duration = 0;
        self.cursor = Some(Cursor::new(song));
        debug!("start: {} byte song", song.len());
    }

    /// Drop the current song. Voices keep decaying on later ticks.
    pub fn stop(&mut self) {
        if self.cursor.take().is_some() {
            debug!("stop");
        }
        self.duration = 0;
    }

    /// Advance by one tick.
    pub fn update<C: SoundChip + ?Sized>(&mut self, chip: &mut C) {
        let mut channel = self.bank.decay_all(chip);

        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };

        while self.duration == 0 {
            match cursor.next_command() {
                Some(Command::Note(note)) => {
                    trace!("note {note} on voice {channel}");
                    self.bank.trigger(channel, note, chip);
                    channel = VoiceBank::<N>::previous(channel);
                }
                Some(Command::Rest(ticks)) => {
                    trace!("rest {ticks}");
                    self.duration = ticks;
                }
                Some(Command::End) | None => {
                    debug!("end of song at byte {}", cursor.position());
                    self.cursor = None;
                    self.duration = 0;
                    return;
                }
            }
        }

        self.duration -= 1;
    }

    /// Returns true while a song is loaded.
    pub fn is_playing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SequencerState {
        match (&self.cursor, self.duration) {
            (None, _) => SequencerState::Idle,
            (Some(_), 0) => SequencerState::Decoding,
            (Some(_), _) => SequencerState::Armed,
        }
    }

    /// Ticks left before the next burst.
    pub fn duration(&self) -> u8 {
        self.duration
    }

    /// The voice bank.
    pub fn voices(&self) -> &VoiceBank<N> {
        &self.bank
    }

    /// Bytes consumed from the current song, or 0 when idle.
    pub fn position(&self) -> usize {
        self.cursor.as_ref().map_or(0, Cursor::position)
    }

    /// Returns true once the song has ended and every voice has faded.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_none() && self.bank.is_silent()
    }

    /// Stop the song and cut all voices on the chip.
    pub fn silence<C: SoundChip + ?Sized>(&mut self, chip: &mut C) {
        self.stop();
        self.bank.silence_all(chip);
    }

    /// Return to the power-on state without touching the chip.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.duration = 0;
        self.bank.reset();
    }
}

impl<const N: usize> Default for Sequencer<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::ChipWrite;
    use crate::frequency::note_period;
    use crate::voice::{ATTENUATION_FULL, ATTENUATION_OFF, MAX_VOLUME};
    use crate::write_log::WriteLog;
    use alloc::vec::Vec;
    use cs_ir::{SongBuilder, DEMO_SONG};

    type Log = WriteLog<256>;

    fn tick<const N: usize>(seq: &mut Sequencer<'_, N>) -> Log {
        let mut log = Log::new();
        seq.update(&mut log);
        log
    }

    // === Idle tests ===

    #[test]
    fn new_sequencer_is_idle() {
        let seq = Sequencer::<3>::new();
        assert_eq!(seq.state(), SequencerState::Idle);
        assert!(!seq.is_playing());
        assert!(seq.is_finished());
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn idle_update_only_decays() {
        let mut seq = Sequencer::<3>::new();
        for _ in 0..10 {
            assert!(tick(&mut seq).is_empty());
        }
        assert_eq!(seq.state(), SequencerState::Idle);
    }

    #[test]
    fn idle_update_keeps_fading_after_stop() {
        let song = [5, 0x84, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        seq.stop();

        let log = tick(&mut seq);
        assert_eq!(log.frequencies().count(), 0);
        assert_eq!(log.attenuations().collect::<Vec<_>>(), [(2, 0)]);
        assert_eq!(seq.voices().voice(2).unwrap().volume(), MAX_VOLUME - 1);
    }

    // === Start tests ===

    #[test]
    fn start_arms_decode() {
        let song = [0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        assert_eq!(seq.state(), SequencerState::Decoding);
        assert_eq!(seq.duration(), 0);
        assert!(seq.is_playing());
    }

    #[test]
    fn sentinel_alone_stops_after_one_update() {
        let song = [0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        let log = tick(&mut seq);
        assert!(log.is_empty());
        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(seq.duration(), 0);
    }

    #[test]
    fn empty_song_ends_immediately() {
        let mut seq = Sequencer::<3>::new();
        seq.start(&[]);
        tick(&mut seq);
        assert!(!seq.is_playing());
    }

    // === Burst tests ===

    #[test]
    fn chord_burst_allocates_downwards_with_wrap() {
        let song = [5, 10, 0x83, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);

        // All voices free: the last one seen is voice 2.
        let log = tick(&mut seq);
        assert_eq!(
            log.writes(),
            &[
                ChipWrite::Frequency { voice: 2, period: note_period(5) },
                ChipWrite::Attenuation { voice: 2, level: ATTENUATION_FULL },
                ChipWrite::Frequency { voice: 1, period: note_period(10) },
                ChipWrite::Attenuation { voice: 1, level: ATTENUATION_FULL },
            ]
        );
        assert_eq!(seq.state(), SequencerState::Armed);
        assert_eq!(seq.duration(), 2);

        for _ in 0..2 {
            let log = tick(&mut seq);
            assert_eq!(log.frequencies().count(), 0);
            assert!(seq.is_playing());
        }

        let log = tick(&mut seq);
        assert_eq!(log.frequencies().count(), 0);
        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn chord_wraps_past_voice_zero() {
        let song = [1, 2, 3, 4, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        let log = tick(&mut seq);
        let voices: Vec<usize> = log.frequencies().map(|(v, _)| v).collect();
        assert_eq!(voices, [2, 1, 0, 2]);
        let periods: Vec<u16> = log.frequencies().map(|(_, p)| p).collect();
        assert_eq!(periods[3], note_period(4));
    }

    #[test]
    fn next_burst_starts_from_last_free_voice() {
        // Note on voice 2, then a second note while 2 is still sounding.
        let song = [7, 0x81, 8, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        let first = tick(&mut seq);
        assert_eq!(first.frequencies().next(), Some((2, note_period(7))));
        let second = tick(&mut seq);
        assert_eq!(second.frequencies().next(), Some((1, note_period(8))));
    }

    #[test]
    fn full_bank_reuses_previous_candidate() {
        let song = [1, 2, 3, 0x81, 9, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        assert_eq!(seq.voices().volumes(), [MAX_VOLUME; 3]);
        // Nothing free, so the candidate from the first tick (2) stands.
        let log = tick(&mut seq);
        assert_eq!(log.frequencies().collect::<Vec<_>>(), [(2, note_period(9))]);
    }

    #[test]
    fn zero_rest_does_not_end_burst() {
        let song = [1, 0x80, 2, 0x82, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        let log = tick(&mut seq);
        assert_eq!(
            log.frequencies().collect::<Vec<_>>(),
            [(2, note_period(1)), (1, note_period(2))]
        );
        assert_eq!(seq.duration(), 1);
    }

    #[test]
    fn running_off_the_end_stops() {
        let song = [4, 0x82];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        tick(&mut seq);
        assert!(seq.is_playing());
        tick(&mut seq);
        assert!(!seq.is_playing());
    }

    #[test]
    fn note_index_is_masked() {
        let song = [0x7F, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        let log = tick(&mut seq);
        assert_eq!(log.frequencies().next(), Some((2, note_period(63))));
    }

    // === Decay tests ===

    #[test]
    fn decay_writes_before_decode() {
        let song = [3, 0x81, 4, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        let log = tick(&mut seq);
        assert_eq!(log.writes()[0], ChipWrite::Attenuation { voice: 2, level: 0 });
        assert!(matches!(log.writes()[1], ChipWrite::Frequency { voice: 1, .. }));
    }

    #[test]
    fn voice_decays_to_silence_in_max_volume_ticks() {
        let song = [3, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        for step in 0..MAX_VOLUME {
            let log = tick(&mut seq);
            assert_eq!(log.attenuations().collect::<Vec<_>>(), [(2, step)]);
        }
        assert!(seq.is_finished());
        assert!(tick(&mut seq).is_empty());
    }

    // === Restart tests ===

    #[test]
    fn restart_discards_old_song() {
        let old = [1, 0x90, 2, 0x81, 0xFF];
        let new = [9, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&old);
        tick(&mut seq);
        assert_eq!(seq.duration(), 15);

        seq.start(&new);
        assert_eq!(seq.state(), SequencerState::Decoding);
        let log = tick(&mut seq);
        let notes: Vec<_> = log.frequencies().collect();
        assert_eq!(notes, [(1, note_period(9))]);
        // Voice 2 from the old song keeps fading.
        assert_eq!(seq.voices().voice(2).unwrap().volume(), MAX_VOLUME - 1);
    }

    #[test]
    fn replay_is_deterministic() {
        let mut builder = SongBuilder::new();
        builder.chord(&[10, 14, 17], 5).unwrap();
        builder.note(12).unwrap().rest(0).unwrap().note(20).unwrap();
        builder.wait(70);
        let song = builder.finish();

        let run = |song: &[u8]| {
            let mut seq = Sequencer::<3>::new();
            let mut all = Vec::new();
            seq.start(song);
            while !seq.is_finished() {
                let log = tick(&mut seq);
                all.extend_from_slice(log.writes());
            }
            all
        };
        assert_eq!(run(&song), run(&song));
    }

    // === Control tests ===

    #[test]
    fn silence_cuts_every_voice() {
        let song = [1, 2, 0x90, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        let mut log = Log::new();
        seq.silence(&mut log);
        assert_eq!(log.attenuations().filter(|&(_, l)| l == ATTENUATION_OFF).count(), 3);
        assert!(seq.is_finished());
    }

    #[test]
    fn reset_returns_to_power_on() {
        let song = [1, 0x90, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        seq.reset();
        assert_eq!(seq.state(), SequencerState::Idle);
        assert!(seq.voices().is_silent());
    }

    #[test]
    fn position_tracks_consumed_bytes() {
        let song = [1, 2, 0x82, 3, 0x81, 0xFF];
        let mut seq = Sequencer::<3>::new();
        seq.start(&song);
        tick(&mut seq);
        assert_eq!(seq.position(), 3);
        tick(&mut seq);
        tick(&mut seq);
        assert_eq!(seq.position(), 5);
    }

    #[test]
    fn demo_song_plays_to_the_end() {
        let summary = cs_ir::analyze(DEMO_SONG);
        let mut seq = Sequencer::<3>::new();
        let mut log = WriteLog::<0>::new();
        seq.start(DEMO_SONG);
        let mut ticks = 0u64;
        while seq.is_playing() {
            seq.update(&mut log);
            ticks += 1;
        }
        assert_eq!(ticks, summary.ticks);
    }
}
