// In: src/error.rs

//! This module defines the single, unified error type for the entire myrustlib crate.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoublesError {
    // =========================================================================
    // === Semantic Errors
    // =========================================================================
    /// The host value has no text view. Mirrors Python's own wording for
    /// builtins, e.g. `count_doubles() argument must be str, not int`.
    #[error("{function}() argument must be {expected}, not {found}")]
    InvalidArgumentType {
        function: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid counter configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from the Serde JSON library, typically while (de)serializing
    /// a `CounterConfig` or `DoubleStats`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Opening the log file requested by `enable_verbose_logging`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

#[cfg(feature = "python")]
impl From<DoublesError> for pyo3::PyErr {
    fn from(err: DoublesError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyOSError, PyTypeError, PyValueError};
        match err {
            DoublesError::InvalidArgumentType { .. } => PyTypeError::new_err(err.to_string()),
            DoublesError::Io(_) => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_type_message_matches_python_wording() {
        let err = DoublesError::InvalidArgumentType {
            function: "count_doubles",
            expected: "str",
            found: "int".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "count_doubles() argument must be str, not int"
        );
    }

    #[test]
    fn test_serde_error_converts_via_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DoublesError = parse_err.into();
        assert!(matches!(err, DoublesError::SerdeJson(_)));
        assert!(err.to_string().starts_with("Serde JSON error"));
    }

    #[cfg(feature = "python")]
    #[test]
    fn test_errors_map_to_python_exception_types() {
        use pyo3::exceptions::{PyOSError, PyTypeError, PyValueError};
        use pyo3::{PyErr, Python};

        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let type_err: PyErr = DoublesError::InvalidArgumentType {
                function: "count_doubles",
                expected: "str",
                found: "bytes".to_string(),
            }
            .into();
            assert!(type_err.is_instance_of::<PyTypeError>(py));
            assert_eq!(
                type_err.value_bound(py).to_string(),
                "count_doubles() argument must be str, not bytes"
            );

            let config_err: PyErr = DoublesError::InvalidConfig("bad".to_string()).into();
            assert!(config_err.is_instance_of::<PyValueError>(py));

            let io_err: PyErr = DoublesError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            ))
            .into();
            assert!(io_err.is_instance_of::<PyOSError>(py));
        });
    }
}
