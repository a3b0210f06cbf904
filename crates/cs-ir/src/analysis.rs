//! Song analysis: scans a command stream to report what a playback will do.
//!
//! Informational only. Playback never consults it.

use core::fmt;

use crate::command::Command;
use crate::cursor::Cursor;

/// Summary of a song's contents and length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongSummary {
    /// Bytes read, up to and including the end marker.
    pub bytes: usize,
    /// Note events.
    pub notes: usize,
    /// Decode bursts, one per nonzero rest.
    pub bursts: usize,
    /// Most notes triggered within a single tick.
    pub longest_chord: usize,
    /// Lowest and highest note index used.
    pub note_range: Option<(u8, u8)>,
    /// Sequencer ticks from start until playback stops.
    pub ticks: u64,
    /// Whether the stream ends with the end marker rather than running out.
    pub terminated: bool,
}

/// Walk a song the way the sequencer would and summarise it.
pub fn analyze(song: &[u8]) -> SongSummary {
    let mut summary = SongSummary::default();
    let mut cursor = Cursor::new(song);
    let mut chord = 0usize;
    // The tick that decodes the final byte counts too.
    let mut ticks: u64 = 1;

    while let Some(command) = cursor.next_command() {
        match command {
            Command::Note(n) => {
                summary.notes += 1;
                chord += 1;
                summary.note_range = Some(match summary.note_range {
                    Some((lo, hi)) => (lo.min(n), hi.max(n)),
                    None => (n, n),
                });
            }
            Command::Rest(0) => {}
            Command::Rest(t) => {
                summary.bursts += 1;
                ticks += t as u64;
                summary.longest_chord = summary.longest_chord.max(chord);
                chord = 0;
            }
            Command::End => {
                summary.terminated = true;
                break;
            }
        }
    }

    summary.longest_chord = summary.longest_chord.max(chord);
    summary.bytes = cursor.position();
    summary.ticks = ticks;
    summary
}

impl SongSummary {
    /// Whether some tick triggers more notes than `voices` can hold at once.
    pub fn overflows(&self, voices: usize) -> bool {
        self.longest_chord > voices
    }
}

impl fmt::Display for SongSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bytes:    {}", self.bytes)?;
        writeln!(f, "Notes:    {} in {} bursts", self.notes, self.bursts)?;
        if let Some((lo, hi)) = self.note_range {
            writeln!(f, "Range:    {} - {}", lo, hi)?;
        }
        writeln!(f, "Chord:    {} voices max", self.longest_chord)?;
        write!(f, "Ticks:    {}", self.ticks)?;
        if !self.terminated {
            write!(f, " (no end marker)")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DEMO_SONG;

    #[test]
    fn empty_song_takes_one_tick() {
        let s = analyze(&[]);
        assert_eq!(s.ticks, 1);
        assert_eq!(s.notes, 0);
        assert!(!s.terminated);
    }

    #[test]
    fn end_only() {
        let s = analyze(&[0xFF]);
        assert_eq!(s.bytes, 1);
        assert_eq!(s.ticks, 1);
        assert!(s.terminated);
    }

    #[test]
    fn chord_then_rest() {
        let s = analyze(&[0x05, 0x0A, 0x83, 0xFF]);
        assert_eq!(s.notes, 2);
        assert_eq!(s.bursts, 1);
        assert_eq!(s.longest_chord, 2);
        assert_eq!(s.note_range, Some((5, 10)));
        // decode tick + two waiting ticks, then the tick that reads the marker
        assert_eq!(s.ticks, 4);
    }

    #[test]
    fn zero_rest_joins_bursts() {
        let s = analyze(&[0x01, 0x80, 0x02, 0x03, 0x81, 0xFF]);
        assert_eq!(s.bursts, 1);
        assert_eq!(s.longest_chord, 3);
    }

    #[test]
    fn notes_before_marker_count_as_chord() {
        let s = analyze(&[0x01, 0x81, 0x02, 0x03, 0x04, 0x05, 0xFF]);
        assert_eq!(s.longest_chord, 4);
        assert!(s.overflows(3));
    }

    #[test]
    fn bytes_after_marker_are_ignored() {
        let s = analyze(&[0x81, 0xFF, 0x01, 0x02]);
        assert_eq!(s.bytes, 2);
        assert_eq!(s.notes, 0);
    }

    #[test]
    fn demo_song_summary() {
        let s = analyze(DEMO_SONG);
        assert!(s.terminated);
        assert_eq!(s.bytes, DEMO_SONG.len());
        assert_eq!(s.notes, 2142);
        assert_eq!(s.bursts, 971);
        assert_eq!(s.ticks, 12121);
        assert_eq!(s.longest_chord, 3);
        assert!(!s.overflows(3));
    }
}
