//! Single-byte song commands.

use core::fmt;

/// Set on rest bytes and the end marker, clear on note bytes.
pub const DURATION_FLAG: u8 = 0x80;

/// Low six bits: note index or rest length.
pub const NOTE_MASK: u8 = 0x3F;

/// End-of-song marker. Checked before the rest length is extracted.
pub const END_OF_SONG: u8 = 0xFF;

/// Highest note index the frequency table holds.
pub const MAX_NOTE: u8 = NOTE_MASK;

/// Longest rest a single byte can encode, in ticks.
pub const MAX_DURATION: u8 = NOTE_MASK;

/// One decoded song byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Trigger the next channel with this note index (0-63).
    Note(u8),
    /// Wait this many ticks before decoding again (0-63).
    Rest(u8),
    /// Stop playback.
    End,
}

impl Command {
    /// Decode a song byte.
    ///
    /// Every byte decodes to something. Bit 6 of note and rest bytes is not
    /// part of the value and is dropped.
    pub const fn decode(byte: u8) -> Self {
        if byte == END_OF_SONG {
            Command::End
        } else if byte & DURATION_FLAG == 0 {
            Command::Note(byte & NOTE_MASK)
        } else {
            Command::Rest(byte & NOTE_MASK)
        }
    }

    /// Encode to a song byte.
    pub fn encode(self) -> Result<u8, EncodeError> {
        match self {
            Command::Note(note) if note <= MAX_NOTE => Ok(note),
            Command::Note(note) => Err(EncodeError::NoteOutOfRange(note)),
            Command::Rest(ticks) if ticks <= MAX_DURATION => Ok(DURATION_FLAG | ticks),
            Command::Rest(ticks) => Err(EncodeError::DurationOutOfRange(ticks)),
            Command::End => Ok(END_OF_SONG),
        }
    }
}

/// Error type for encoding commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// Note index does not fit in six bits
    NoteOutOfRange(u8),
    /// Rest length does not fit in six bits
    DurationOutOfRange(u8),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NoteOutOfRange(n) => {
                write!(f, "note {} out of range (max {})", n, MAX_NOTE)
            }
            EncodeError::DurationOutOfRange(t) => {
                write!(f, "rest of {} ticks out of range (max {})", t, MAX_DURATION)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
