//! Song encoding for producers and tests.

use alloc::vec::Vec;

use crate::command::{Command, EncodeError, DURATION_FLAG, END_OF_SONG, MAX_DURATION};

/// Builds a song byte stream one command at a time.
///
/// ```
/// use cs_ir::SongBuilder;
///
/// let mut b = SongBuilder::new();
/// b.chord(&[5, 10], 3).unwrap();
/// assert_eq!(b.finish(), [0x05, 0x0A, 0x83, 0xFF]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SongBuilder {
    bytes: Vec<u8>,
}

impl SongBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append a single command.
    pub fn push(&mut self, command: Command) -> Result<&mut Self, EncodeError> {
        self.bytes.push(command.encode()?);
        Ok(self)
    }

    /// Append a note event.
    pub fn note(&mut self, note: u8) -> Result<&mut Self, EncodeError> {
        self.push(Command::Note(note))
    }

    /// Append a rest of `ticks` (0-63).
    pub fn rest(&mut self, ticks: u8) -> Result<&mut Self, EncodeError> {
        self.push(Command::Rest(ticks))
    }

    /// Append notes sounding together, followed by their rest.
    pub fn chord(&mut self, notes: &[u8], ticks: u8) -> Result<&mut Self, EncodeError> {
        for &note in notes {
            self.note(note)?;
        }
        self.rest(ticks)
    }

    /// Wait any number of ticks, split into the longest rests that fit.
    pub fn wait(&mut self, mut ticks: u32) -> &mut Self {
        while ticks > 0 {
            let step = ticks.min(MAX_DURATION as u32);
            self.bytes.push(DURATION_FLAG | step as u8);
            ticks -= step;
        }
        self
    }

    /// Number of bytes written so far, excluding the end marker.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Terminate the song with the end marker and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.bytes.push(END_OF_SONG);
        self.bytes
    }
}
