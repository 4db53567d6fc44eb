// In benches/support/mod.rs
//
// Text generators shared by the benchmarks and the bridge tests
// (`src/bridge/tests.rs` pulls this file in with `#[path]`).
#![allow(dead_code)]

use rand::Rng;

pub const ASCII_LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// One to four byte UTF-8 encodings. The alphabet is small so doubles are common,
/// and 'é' (C3 A9) / 'ã' (C3 A3) share a lead byte, so byte and char counts diverge.
pub const MIXED_ALPHABET: &[char] = &['a', 'b', 'é', 'ã', 'ß', '日', '本', '🦀'];

/// `len` characters drawn uniformly from `alphabet`.
pub fn random_text<R: Rng + ?Sized>(rng: &mut R, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Random ASCII letters: roughly one double every 52 characters.
pub fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_text(rng, ASCII_LETTERS, len)
}

/// Random characters of mixed UTF-8 width.
pub fn random_mixed_text<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_text(rng, MIXED_ALPHABET, len)
}
