//! Forward-only read cursor over song bytes.

use crate::command::Command;

/// A read position inside a borrowed song.
///
/// Commands are consumed by advancing an index, so reading never copies or
/// allocates. There is no way to move the cursor backwards.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    song: &'a [u8],
    /// Next byte index to decode.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first byte of `song`.
    pub const fn new(song: &'a [u8]) -> Self {
        Self { song, pos: 0 }
    }

    /// Decode the next command, or `None` once every byte has been read.
    pub fn next_command(&mut self) -> Option<Command> {
        let byte = *self.song.get(self.pos)?;
        self.pos += 1;
        Some(Command::decode(byte))
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}
