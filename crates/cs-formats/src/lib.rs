//! Song loaders and WAV export for the chipseq sequencer.
//!
//! Songs ship either as raw byte streams or as C array initialisers
//! (`{0x35,0x41,0x8a,...,0xff}`). Both load into the same byte vector.

mod song;
mod wav;

pub use song::{load_hex_text, load_raw, load_song};
pub use wav::{samples_to_wav, write_wav};

use std::fmt;

/// Error type for song loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No song bytes were found
    Empty,
    /// A token in hex text is not a byte value
    InvalidToken { token: String, line: usize },
    /// A `{` with no matching `}`
    UnterminatedArray,
    /// A `/*` with no matching `*/`
    UnterminatedComment,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Empty => write!(f, "song is empty"),
            FormatError::InvalidToken { token, line } => {
                write!(f, "line {}: '{}' is not a hex byte", line, token)
            }
            FormatError::UnterminatedArray => write!(f, "missing closing '}}'"),
            FormatError::UnterminatedComment => write!(f, "unterminated block comment"),
        }
    }
}

impl std::error::Error for FormatError {}
