//! This module serves as the public API and dispatcher for the collection of all
//! pure, stateless counting kernels.
//!
//! It declares the kernel sub-modules and provides a single `dispatch` function
//! that takes a `CounterConfig` and calls the matching kernel. Kernels never see
//! host values: by the time text reaches this module, the bridge has already
//! checked that it is text.

use crate::config::{CountUnit, CounterConfig, Traversal};

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Generic single-pass counting over any `PartialEq` iterator.
pub mod adjacent;

/// Byte-level counters (the `count_doubles` contract).
pub mod bytes;

/// Unicode scalar value counters.
pub mod chars;

pub use adjacent::count_adjacent_equal;
pub use bytes::{count_byte_doubles, count_byte_doubles_backward, count_byte_doubles_once};
pub use chars::{count_char_doubles, count_char_doubles_backward, count_char_doubles_once};

//==================================================================================
// 2. Public API (Unified Dispatcher)
//==================================================================================

/// Counts adjacent doubles in `text` using the unit and traversal in `config`.
pub fn dispatch(text: &str, config: &CounterConfig) -> u64 {
    match (config.unit, config.traversal) {
        (CountUnit::Bytes, Traversal::Forward) => count_byte_doubles(text.as_bytes()),
        (CountUnit::Bytes, Traversal::Backward) => count_byte_doubles_backward(text.as_bytes()),
        (CountUnit::Bytes, Traversal::SinglePass) => count_byte_doubles_once(text.as_bytes()),
        (CountUnit::Chars, Traversal::Forward) => count_char_doubles(text),
        (CountUnit::Chars, Traversal::Backward) => count_char_doubles_backward(text),
        (CountUnit::Chars, Traversal::SinglePass) => count_char_doubles_once(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAVERSALS: [Traversal; 3] = [
        Traversal::Forward,
        Traversal::Backward,
        Traversal::SinglePass,
    ];

    #[test]
    fn test_all_traversals_agree_per_unit() {
        let samples = ["", "q", "mississippi", "aaaa", "éé", "bookkeeper", "Ünïcödé ßß"];
        for unit in [CountUnit::Bytes, CountUnit::Chars] {
            for text in samples {
                let reference = dispatch(text, &CounterConfig { unit, traversal: Traversal::Forward });
                for traversal in TRAVERSALS {
                    let config = CounterConfig { unit, traversal };
                    assert_eq!(
                        dispatch(text, &config),
                        reference,
                        "{:?} disagreed on {:?}",
                        config,
                        text
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_config_is_byte_count() {
        let config = CounterConfig::default();
        assert_eq!(dispatch("bookkeeper", &config), 3);
        assert_eq!(dispatch("éé", &config), 0);
    }

    #[test]
    fn test_unit_changes_result_for_multibyte_text() {
        let chars = CounterConfig {
            unit: CountUnit::Chars,
            ..Default::default()
        };
        assert_eq!(dispatch("éé", &chars), 1);
    }
}
