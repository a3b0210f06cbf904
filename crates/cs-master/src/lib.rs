//! Headless controller for the chipseq sequencer.
//!
//! Provides a unified API for loading songs, playback, and rendering
//! that the CLI and tests share.

use cs_audio::{AudioOutput, CpalOutput};
use cs_engine::{Engine, MAX_VOLUME};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

// Re-export common types so callers don't need cs-ir/cs-formats directly.
pub use cs_audio::AudioError;
pub use cs_engine::DEFAULT_VOICES;
pub use cs_formats::{samples_to_wav, write_wav, FormatError};
pub use cs_ir::{SongSummary, TickRate, DEMO_SONG};

/// Runtime playback settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Output rate for offline rendering. Live playback uses the device rate.
    pub sample_rate: u32,
    pub tick_rate: TickRate,
    /// Restart the song when it ends
    pub looping: bool,
    /// Upper bound on offline render length
    pub max_seconds: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            tick_rate: TickRate::NTSC,
            looping: false,
            max_seconds: 300,
        }
    }
}

/// Headless sequencer controller: owns a song and manages playback.
pub struct Controller {
    song: Vec<u8>,
    config: PlaybackConfig,
    playback: Option<PlaybackHandle>,
}

struct PlaybackHandle {
    stop_signal: Arc<AtomicBool>,
    current_tick: Arc<AtomicU64>,
    finished: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Controller {
    /// Create a controller holding the demo song.
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            song: DEMO_SONG.to_vec(),
            config,
            playback: None,
        }
    }

    // --- Song management ---

    pub fn song(&self) -> &[u8] {
        &self.song
    }

    /// Replace the song with raw or hex-text song data.
    pub fn load(&mut self, data: &[u8]) -> Result<(), FormatError> {
        let song = cs_formats::load_song(data)?;
        self.stop();
        self.song = song;
        Ok(())
    }

    pub fn summary(&self) -> SongSummary {
        cs_ir::analyze(&self.song)
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Change settings. Takes effect on the next `play` or render.
    pub fn set_config(&mut self, config: PlaybackConfig) {
        self.config = config;
    }

    // --- Real-time playback ---

    pub fn play(&mut self) {
        self.stop();

        let song = self.song.clone();
        let config = self.config;
        let stop_signal = Arc::new(AtomicBool::new(false));
        let current_tick = Arc::new(AtomicU64::new(0));
        let finished = Arc::new(AtomicBool::new(false));

        let stop = stop_signal.clone();
        let tick = current_tick.clone();
        let done = finished.clone();

        let thread = std::thread::spawn(move || {
            if let Err(e) = audio_thread(&song, config, &stop, &tick) {
                warn!("playback failed: {}", e);
            }
            done.store(true, Ordering::Relaxed);
        });

        self.playback = Some(PlaybackHandle {
            stop_signal,
            current_tick,
            finished,
            thread: Some(thread),
        });
    }

    pub fn stop(&mut self) {
        if let Some(mut pb) = self.playback.take() {
            pb.stop_signal.store(true, Ordering::Relaxed);
            if let Some(handle) = pb.thread.take() {
                let _ = handle.join();
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| !p.finished.load(Ordering::Relaxed))
    }

    pub fn is_finished(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| p.finished.load(Ordering::Relaxed))
    }

    /// Ticks played so far, or `None` when nothing is playing.
    pub fn position(&self) -> Option<u64> {
        let pb = self.playback.as_ref()?;
        if pb.finished.load(Ordering::Relaxed) {
            return None;
        }
        Some(pb.current_tick.load(Ordering::Relaxed))
    }

    // --- Offline rendering ---

    /// Render until the song has ended and faded, or `max_samples` is reached.
    pub fn render_samples(&self, max_samples: usize) -> Vec<i16> {
        let mut engine = Engine::new(self.config.sample_rate, self.config.tick_rate);
        engine.set_looping(self.config.looping);
        engine.start(&self.song);

        let mut samples = Vec::with_capacity(max_samples.min(self.expected_samples()));
        while !engine.is_finished() && samples.len() < max_samples {
            samples.push(engine.render_sample());
        }
        debug!("rendered {} samples, {} ticks", samples.len(), engine.position());
        samples
    }

    /// Samples from start until the last note has faded, ignoring looping.
    fn expected_samples(&self) -> usize {
        let ticks = self.summary().ticks + u64::from(MAX_VOLUME);
        let samples = match self.config.tick_rate.hz() {
            0 => 0,
            hz => ticks.saturating_mul(u64::from(self.config.sample_rate)) / u64::from(hz),
        };
        usize::try_from(samples).unwrap_or(usize::MAX)
    }

    /// Render to an in-memory WAV file, capped at `max_seconds`.
    pub fn render_to_wav(&self) -> Vec<u8> {
        let max_samples =
            (self.config.sample_rate as usize).saturating_mul(self.config.max_seconds as usize);
        let samples = self.render_samples(max_samples);
        samples_to_wav(&samples, self.config.sample_rate)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn audio_thread(
    song: &[u8],
    config: PlaybackConfig,
    stop_signal: &AtomicBool,
    current_tick: &AtomicU64,
) -> Result<(), AudioError> {
    let (mut output, consumer) = CpalOutput::new()?;

    let sample_rate = output.sample_rate();
    let mut engine = Engine::new(sample_rate, config.tick_rate);
    engine.set_looping(config.looping);
    engine.start(song);

    output.build_stream(consumer)?;
    output.start()?;

    #[cfg(feature = "alloc_check")]
    assert_no_alloc::assert_no_alloc(|| pump(&mut engine, &mut output, stop_signal, current_tick));
    #[cfg(not(feature = "alloc_check"))]
    pump(&mut engine, &mut output, stop_signal, current_tick);

    // Let the ring buffer drain before the stream is dropped.
    for _ in 0..sample_rate / 10 {
        output.write_spin(0);
    }
    output.stop()
}

fn pump(
    engine: &mut Engine<'_>,
    output: &mut CpalOutput,
    stop_signal: &AtomicBool,
    current_tick: &AtomicU64,
) {
    while !engine.is_finished() && !stop_signal.load(Ordering::Relaxed) {
        output.write_spin(engine.render_sample());
        current_tick.store(engine.position(), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_song() -> Vec<u8> {
        vec![49, 0x82, 0xFF]
    }

    #[test]
    fn new_holds_demo_song() {
        let ctrl = Controller::default();
        assert_eq!(ctrl.song(), DEMO_SONG);
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.position(), None);
    }

    #[test]
    fn load_hex_text() {
        let mut ctrl = Controller::default();
        ctrl.load(b"{0x31, 0x82, 0xff}").unwrap();
        assert_eq!(ctrl.song(), short_song());
        assert_eq!(ctrl.summary().notes, 1);
    }

    #[test]
    fn load_error_keeps_song() {
        let mut ctrl = Controller::default();
        assert!(ctrl.load(b"{0x31, zz}").is_err());
        assert_eq!(ctrl.song(), DEMO_SONG);
    }

    #[test]
    fn render_stops_after_fade() {
        let mut ctrl = Controller::default();
        ctrl.load(&short_song()).unwrap();
        let samples = ctrl.render_samples(44100 * 10);
        // Tick 32 silences the last voice; ticks are 735 samples apart.
        assert_eq!(samples.len(), 31 * 735 + 1);
        assert!(samples.iter().any(|&s| s != 0));
    }

    #[test]
    fn huge_cap_reserves_only_song_length() {
        let mut ctrl = Controller::default();
        ctrl.load(&short_song()).unwrap();
        let samples = ctrl.render_samples(usize::MAX);
        assert_eq!(samples.len(), 31 * 735 + 1);
        assert!(samples.capacity() < 1 << 16, "capacity {}", samples.capacity());
    }

    #[test]
    fn looping_render_hits_cap() {
        let mut ctrl = Controller::default();
        ctrl.load(&short_song()).unwrap();
        ctrl.set_config(PlaybackConfig { looping: true, ..PlaybackConfig::default() });
        assert_eq!(ctrl.render_samples(44100).len(), 44100);
    }

    #[test]
    fn wav_export_uses_config_rate() {
        let mut ctrl = Controller::default();
        ctrl.load(&short_song()).unwrap();
        ctrl.set_config(PlaybackConfig { sample_rate: 22050, ..PlaybackConfig::default() });
        let wav = ctrl.render_to_wav();
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 22050);
    }
}
