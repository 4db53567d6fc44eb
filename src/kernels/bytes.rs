//! This module contains the pure, stateless kernels that count adjacent equal
//! bytes in a UTF-8 buffer.
//!
//! `count_byte_doubles` is the reference routine behind `count_doubles`. The
//! other two visit the same pairs in a different order and must always agree
//! with it.

use super::adjacent::count_adjacent_equal;

/// Counts every `i` in `0..len - 1` with `data[i] == data[i + 1]`.
///
/// `windows(2)` yields nothing for fewer than two bytes, so sizes 0 and 1
/// return 0 without computing `len - 2`.
pub fn count_byte_doubles(data: &[u8]) -> u64 {
    data.windows(2).filter(|pair| pair[0] == pair[1]).count() as u64
}

/// Same count, scanning from the last pair back to the first.
pub fn count_byte_doubles_backward(data: &[u8]) -> u64 {
    if data.len() <= 1 {
        return 0;
    }
    let mut total = 0u64;
    // `i` is the right-hand index of each pair, so it never goes below 1.
    for i in (1..data.len()).rev() {
        total += u64::from(data[i] == data[i - 1]);
    }
    total
}

/// Same count in one pass over the byte iterator.
pub fn count_byte_doubles_once(data: &[u8]) -> u64 {
    count_adjacent_equal(data.iter())
}
