//! Main playback engine.
//!
//! Drives a [`Sequencer`] from an audio sample clock: every output sample
//! advances a fractional tick accumulator, and whenever a tick boundary is
//! crossed the sequencer is updated against the software [`Psg`].

use alloc::vec::Vec;
use cs_ir::TickRate;
use log::debug;

use crate::psg::Psg;
use crate::sequencer::Sequencer;

/// The main playback engine.
pub struct Engine<'a> {
    sequencer: Sequencer<'a>,
    psg: Psg,
    /// Song to restart from when looping
    song: Option<&'a [u8]>,
    /// Audio sample rate (e.g., 44100)
    sample_rate: u32,
    /// Host tick frequency
    tick_rate: TickRate,
    /// Bresenham accumulator, in units of 1 / (sample_rate * tick_rate) s.
    /// Stays below `sample_rate + tick_rate`, which can exceed `u32::MAX`.
    tick_phase: u64,
    /// Ticks processed since the last start
    ticks: u64,
    looping: bool,
}

impl<'a> Engine<'a> {
    /// Create an idle engine rendering at `sample_rate`.
    pub fn new(sample_rate: u32, tick_rate: TickRate) -> Self {
        let sample_rate = sample_rate.max(1);
        Self {
            sequencer: Sequencer::new(),
            psg: Psg::new(sample_rate),
            song: None,
            sample_rate,
            tick_rate,
            tick_phase: 0,
            ticks: 0,
            looping: false,
        }
    }

    /// Start playing `song` from the top. The first tick falls on the next sample.
    pub fn start(&mut self, song: &'a [u8]) {
        self.song = Some(song);
        self.sequencer.start(song);
        self.tick_phase = 0;
        self.ticks = 0;
    }

    /// Stop playback and silence the chip.
    pub fn stop(&mut self) {
        self.song = None;
        self.sequencer.silence(&mut self.psg);
    }

    /// Restart the song whenever it ends.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Generate one mono sample.
    #[inline]
    pub fn render_sample(&mut self) -> i16 {
        let rate = u64::from(self.tick_rate.hz());
        while self.tick_phase < rate {
            self.process_tick();
            self.tick_phase += u64::from(self.sample_rate);
        }
        self.tick_phase -= rate;
        self.psg.render_sample()
    }

    /// Fill `out` with rendered samples.
    ///
    /// With the `alloc_check` feature this aborts on any heap allocation.
    pub fn render_into(&mut self, out: &mut [i16]) {
        #[cfg(feature = "alloc_check")]
        assert_no_alloc::assert_no_alloc(|| self.fill(out));
        #[cfg(not(feature = "alloc_check"))]
        self.fill(out);
    }

    fn fill(&mut self, out: &mut [i16]) {
        for sample in out.iter_mut() {
            *sample = self.render_sample();
        }
    }

    /// Render `count` samples into a new buffer.
    pub fn render_samples(&mut self, count: usize) -> Vec<i16> {
        let mut out = alloc::vec![0; count];
        self.render_into(&mut out);
        out
    }

    /// Process a tick (called once per tick).
    fn process_tick(&mut self) {
        self.sequencer.update(&mut self.psg);
        self.ticks += 1;

        if self.looping && !self.sequencer.is_playing() {
            if let Some(song) = self.song {
                debug!("loop after {} ticks", self.ticks);
                self.sequencer.start(song);
            }
        }
    }

    /// Ticks processed since the song started.
    pub fn position(&self) -> u64 {
        self.ticks
    }

    /// Is a song being decoded?
    pub fn is_playing(&self) -> bool {
        self.sequencer.is_playing()
    }

    /// True once the song has ended and its last notes have faded.
    pub fn is_finished(&self) -> bool {
        self.sequencer.is_finished() && self.psg.is_silent()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_ir::{analyze, DEMO_SONG};

    const RATE: u32 = 44100;
    /// Samples between NTSC ticks at 44100 Hz.
    const SPT: usize = 735;

    #[test]
    fn idle_engine_renders_silence() {
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        assert!(engine.render_samples(1000).iter().all(|&s| s == 0));
        assert!(engine.is_finished());
    }

    #[test]
    fn first_tick_falls_on_first_sample() {
        let song = [49, 0x90, 0xFF];
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        engine.start(&song);
        assert_ne!(engine.render_sample(), 0);
        assert_eq!(engine.position(), 1);
    }

    #[test]
    fn ticks_follow_the_tick_rate() {
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        engine.start(DEMO_SONG);
        engine.render_samples(RATE as usize);
        assert_eq!(engine.position(), 60);

        let mut pal = Engine::new(RATE, TickRate::PAL);
        pal.start(DEMO_SONG);
        pal.render_samples(RATE as usize * 2);
        assert_eq!(pal.position(), 100);
    }

    #[test]
    fn uneven_ratio_stays_exact() {
        // 48000 / 60 is whole, 44100 / 50 is whole, 22050 / 60 is not.
        let mut engine = Engine::new(22050, TickRate::NTSC);
        engine.start(DEMO_SONG);
        engine.render_samples(22050 * 3);
        assert_eq!(engine.position(), 180);
    }

    #[test]
    fn song_ends_and_fades() {
        let song = [49, 0x82, 0xFF];
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        engine.start(&song);
        engine.render_samples(SPT * 3);
        assert!(!engine.is_playing());
        assert!(!engine.is_finished());
        engine.render_samples(SPT * 40);
        assert!(engine.is_finished());
        assert!(engine.render_samples(SPT).iter().all(|&s| s == 0));
    }

    #[test]
    fn demo_song_length_matches_summary() {
        let summary = analyze(DEMO_SONG);
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        engine.start(DEMO_SONG);
        while engine.is_playing() {
            engine.render_sample();
        }
        assert_eq!(engine.position(), summary.ticks);
    }

    #[test]
    fn looping_restarts_the_song() {
        let song = [49, 0x82, 0xFF];
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        engine.set_looping(true);
        engine.start(&song);
        engine.render_samples(SPT * 20);
        assert!(engine.is_playing());
        assert!(!engine.is_finished());
    }

    #[test]
    fn stop_silences_immediately() {
        let song = [49, 20, 0x90, 0xFF];
        let mut engine = Engine::new(RATE, TickRate::NTSC);
        engine.start(&song);
        engine.render_samples(100);
        engine.stop();
        assert!(engine.is_finished());
        assert!(engine.render_samples(1000).iter().all(|&s| s == 0));
    }

    #[test]
    fn extreme_rates_do_not_overflow() {
        let mut engine = Engine::new(u32::MAX, TickRate(u32::MAX));
        engine.start(DEMO_SONG);
        engine.render_samples(4);
        assert_eq!(engine.position(), 4);
    }

    #[test]
    fn zero_tick_rate_never_ticks() {
        let mut engine = Engine::new(RATE, TickRate(0));
        engine.start(DEMO_SONG);
        assert!(engine.render_samples(1000).iter().all(|&s| s == 0));
        assert_eq!(engine.position(), 0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let render = || {
            let mut engine = Engine::new(RATE, TickRate::NTSC);
            engine.start(DEMO_SONG);
            engine.render_samples(RATE as usize)
        };
        assert_eq!(render(), render());
    }
}
