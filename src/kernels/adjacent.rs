//! The generic single-pass kernel shared by the byte and character counters.
//!
//! It walks any iterator exactly once, holding only the previous element, so
//! it works equally on `&[u8]` iterators and on the non-indexable `chars()`.

/// Counts positions where an item equals its immediate predecessor.
///
/// An empty or one-item iterator yields 0; there is no index arithmetic to
/// underflow.
pub fn count_adjacent_equal<I>(items: I) -> u64
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = items.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0;
    };

    let mut total = 0u64;
    for item in iter {
        if item == prev {
            total += 1;
        }
        prev = item;
    }
    total
}
