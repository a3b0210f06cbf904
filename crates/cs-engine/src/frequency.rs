//! Note-to-period conversion for the tone generators.
//!
//! Songs address pitch by a six-bit note index. The table maps each index to
//! the period value written to a tone channel's frequency register.

use cs_ir::NOTE_MASK;

/// Clock the period values are measured against: a tone of period `p`
/// sounds at `PERIOD_CLOCK_HZ / p` Hz.
pub const PERIOD_CLOCK_HZ: u32 = 1_789_773;

/// Period for every note index.
///
/// Indices 0-12 repeat the octave below index 13, so songs that set bit 6 of
/// a note byte still land on a playable pitch after masking.
pub const NOTE_PERIODS: [u16; 64] = [
    17356, 32764, 30926, 29190, 27551, 26005, 24546, 23168, 21868, 20640, 19482, 18388, 17356,
    32765, 30926, 29190, 27552, 26005, 24546, 23168, 21868, 20640, 19482, 18389, 17357, 16382,
    15463, 14595, 13776, 13003, 12273, 11584, 10934, 10320, 9741, 9194, 8678, 8191, 7731, 7298,
    6888, 6501, 6136, 5792, 5467, 5160, 4871, 4597, 4339, 4096, 3866, 3649, 3444, 3251, 3068,
    2896, 2733, 2580, 2435, 2299, 2170, 2048, 1933, 1824,
];

/// Period value for a note index.
///
/// Only the low six bits of `note` are used.
pub const fn note_period(note: u8) -> u16 {
    NOTE_PERIODS[(note & NOTE_MASK) as usize]
}

/// Convert a period to a 16.16 fixed-point phase increment per output sample.
///
/// Formula: freq = PERIOD_CLOCK_HZ / period, then increment = freq * 65536 / sample_rate.
pub fn period_to_increment(period: u16, sample_rate: u32) -> u32 {
    if period == 0 || sample_rate == 0 {
        return 0;
    }
    ((PERIOD_CLOCK_HZ as u64 * 65536) / (period as u64 * sample_rate as u64)) as u32
}
