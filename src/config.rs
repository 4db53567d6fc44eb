// In: src/config.rs

//! The single source of truth for how a double count is computed.
//!
//! `CounterConfig` is created once at the application boundary (keyword
//! arguments from Python, or a JSON document) and then passed by reference
//! into the kernel dispatcher. The defaults reproduce the plain
//! `count_doubles` contract: UTF-8 bytes, scanned forward.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DoublesError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// The element type adjacent pairs are formed over.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CountUnit {
    /// **Default:** the raw UTF-8 bytes of the text. Exact byte equality.
    #[default]
    Bytes,

    /// Unicode scalar values. A multi-byte character counts as one unit, so
    /// `"éé"` has one character double but no byte doubles.
    Chars,
}

/// The order in which the pairs are visited. Every variant yields the same
/// count for the same unit; they differ only in access pattern.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// **Default:** pairwise forward scan over `(i, i + 1)`.
    #[default]
    Forward,

    /// Reverse index scan from the last pair to the first.
    Backward,

    /// One iterator pass that remembers the previous element.
    SinglePass,
}

impl FromStr for CountUnit {
    type Err = DoublesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bytes" | "byte" => Ok(CountUnit::Bytes),
            "chars" | "char" | "characters" => Ok(CountUnit::Chars),
            _ => Err(DoublesError::InvalidConfig(format!(
                "Invalid unit '{}'. Must be 'bytes' or 'chars'.",
                s
            ))),
        }
    }
}

impl FromStr for Traversal {
    type Err = DoublesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Traversal::Forward),
            "backward" | "reverse" => Ok(Traversal::Backward),
            "single_pass" | "once" => Ok(Traversal::SinglePass),
            _ => Err(DoublesError::InvalidConfig(format!(
                "Invalid traversal '{}'. Must be 'forward', 'backward', or 'single_pass'.",
                s
            ))),
        }
    }
}

//==================================================================================
// II. The Unified CounterConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CounterConfig {
    /// What a "unit" is when forming adjacent pairs.
    #[serde(default)]
    pub unit: CountUnit,

    /// How the pairs are visited.
    #[serde(default)]
    pub traversal: Traversal,
}

impl CounterConfig {
    /// Builds a config from the string options accepted at the FFI boundary.
    pub fn from_options(unit: &str, traversal: &str) -> Result<Self, DoublesError> {
        Ok(Self {
            unit: unit.parse()?,
            traversal: traversal.parse()?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, DoublesError> {
        Ok(serde_json::from_str(json)?)
    }
}
