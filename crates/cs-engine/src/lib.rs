//! Playback engine for the chipseq sequencer.
//!
//! Interprets song byte streams tick by tick and drives a tone chip through
//! the [`SoundChip`] trait. Nothing on the per-tick path allocates.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod chip;
mod engine;
mod frequency;
mod psg;
mod sequencer;
mod voice;
mod voice_bank;
mod write_log;

pub use chip::{ChipWrite, SoundChip};
pub use engine::Engine;
pub use frequency::{note_period, period_to_increment, NOTE_PERIODS, PERIOD_CLOCK_HZ};
pub use psg::{attenuation_amplitude, Psg};
pub use sequencer::{Sequencer, SequencerState};
pub use voice::{Voice, ATTENUATION_FULL, ATTENUATION_OFF, MAX_VOLUME};
pub use voice_bank::{VoiceBank, VoiceId, DEFAULT_VOICES};
pub use write_log::WriteLog;
