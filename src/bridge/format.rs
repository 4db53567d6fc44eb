// In: src/bridge/format.rs

//! Defines the public result structures returned by the bridge.
//! `DoubleStats` is the contract behind `analyze_doubles`: the Python dict
//! and the JSON rendering are both built from these fields.

use serde::{Deserialize, Serialize};

use crate::error::DoublesError;

/// Summary of one text value's adjacent doubles at both unit levels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleStats {
    /// Length of the UTF-8 encoding in bytes.
    pub byte_len: u64,
    /// Number of Unicode scalar values.
    pub char_len: u64,
    /// Number of adjacent byte pairs, `max(0, byte_len - 1)`. Upper bound for `byte_doubles`.
    pub byte_pairs: u64,
    /// The `count_doubles` result.
    pub byte_doubles: u64,
    /// Adjacent equal characters.
    pub char_doubles: u64,
}

impl DoubleStats {
    pub fn to_json(&self) -> Result<String, DoublesError> {
        Ok(serde_json::to_string(self)?)
    }
}
