//! Character-level counters. A "unit" here is a Unicode scalar value, so a
//! doubled multi-byte character counts once, while its bytes may not match
//! pairwise at all.

use super::adjacent::count_adjacent_equal;

/// Pairwise forward scan: zips `chars()` with itself shifted by one.
pub fn count_char_doubles(text: &str) -> u64 {
    text.chars()
        .zip(text.chars().skip(1))
        .filter(|(c1, c2)| c1 == c2)
        .count() as u64
}

/// Reverse scan; `Chars` is double-ended so no index is needed.
pub fn count_char_doubles_backward(text: &str) -> u64 {
    count_adjacent_equal(text.chars().rev())
}

pub fn count_char_doubles_once(text: &str) -> u64 {
    count_adjacent_equal(text.chars())
}
