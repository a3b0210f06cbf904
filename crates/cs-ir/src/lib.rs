//! Core song types for the chipseq sequencer.
//!
//! This crate defines the compact one-byte-per-command song format. Song
//! producers encode with [`SongBuilder`], the playback engine decodes through
//! a [`Cursor`], and tools inspect streams with [`analyze`].
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod analysis;
mod builder;
mod command;
mod cursor;
pub mod demo;
mod timing;

pub use analysis::{analyze, SongSummary};
pub use builder::SongBuilder;
pub use command::{
    Command, EncodeError, DURATION_FLAG, END_OF_SONG, MAX_DURATION, MAX_NOTE, NOTE_MASK,
};
pub use cursor::Cursor;
pub use demo::DEMO_SONG;
pub use timing::TickRate;
