// In: src/bridge/host_value.rs

//! The tagged view of a host-runtime value at the extension boundary.
//!
//! The FFI layer classifies every incoming object exactly once: either it
//! exposes a UTF-8 text view (`Text`) or it does not (`Other`, remembering only
//! its type name for the error message). Kernels are reachable only through
//! `HostValue::utf8_bytes`/`HostValue::text`, so an unchecked object can never
//! be decoded.

use std::borrow::Cow;

use crate::error::DoublesError;

/// The only host type the counting API accepts.
pub const EXPECTED_TYPE: &str = "str";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue<'a> {
    /// A host string, already encoded as UTF-8 and borrowed from the host.
    Text(&'a str),
    /// Any other host object. Carries the host's name for its type.
    Other(Cow<'a, str>),
}

impl<'a> HostValue<'a> {
    pub fn other(type_name: impl Into<Cow<'a, str>>) -> Self {
        HostValue::Other(type_name.into())
    }

    /// The capability check: returns the text, or `InvalidArgumentType`
    /// attributed to `function`.
    pub fn text(&self, function: &'static str) -> Result<&'a str, DoublesError> {
        match self {
            HostValue::Text(text) => Ok(*text),
            HostValue::Other(type_name) => Err(DoublesError::InvalidArgumentType {
                function,
                expected: EXPECTED_TYPE,
                found: type_name.to_string(),
            }),
        }
    }

    /// Borrowed, read-only UTF-8 bytes of a `Text` value.
    pub fn utf8_bytes(&self, function: &'static str) -> Result<&'a [u8], DoublesError> {
        self.text(function).map(str::as_bytes)
    }
}

impl<'a> From<&'a str> for HostValue<'a> {
    fn from(text: &'a str) -> Self {
        HostValue::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_exposes_utf8_bytes() {
        let value = HostValue::from("né");
        assert_eq!(value, HostValue::Text("né"));
        assert_eq!(value.utf8_bytes("f").unwrap(), &[b'n', 0xC3, 0xA9]);
    }

    #[test]
    fn test_other_fails_with_type_name() {
        let value = HostValue::other("list");
        assert_eq!(value, HostValue::Other(Cow::Borrowed("list")));
        let err = value.utf8_bytes("count_doubles").unwrap_err();
        match err {
            DoublesError::InvalidArgumentType {
                function,
                expected,
                found,
            } => {
                assert_eq!(function, "count_doubles");
                assert_eq!(expected, "str");
                assert_eq!(found, "list");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
