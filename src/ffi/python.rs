// In: src/ffi/python.rs

//! The Python shims. Each `#[pyfunction]` classifies its argument into a
//! `HostValue` exactly once, releases the GIL, and calls the bridge. Argument
//! type errors surface as `TypeError` through `From<DoublesError> for PyErr`.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};
use std::borrow::Cow;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::bridge::{self, HostValue};
use crate::config::CounterConfig;
use crate::error::DoublesError;
use crate::observability;

//==================================================================================
// I. Host Value Classification
//==================================================================================

/// Classifies a Python object. Only `str` (and its subclasses) has a text view;
/// `bytes`, numbers, lists etc. become `HostValue::Other`.
///
/// A `str` holding lone surrogates cannot be encoded as UTF-8; Python's own
/// `UnicodeEncodeError` is propagated unchanged.
fn host_value<'a>(obj: &'a Bound<'_, PyAny>) -> PyResult<HostValue<'a>> {
    match obj.downcast::<PyString>() {
        Ok(text) => Ok(HostValue::Text(text.to_str()?)),
        Err(_) => {
            let type_name = obj
                .get_type()
                .qualname()
                .unwrap_or_else(|_| String::from("object"));
            log::debug!("rejecting non-text argument of type '{}'", type_name);
            Ok(HostValue::Other(Cow::Owned(type_name)))
        }
    }
}

//==================================================================================
// II. Counting API
//==================================================================================

/// Counts adjacent equal bytes in the UTF-8 encoding of `val`.
#[pyfunction]
#[pyo3(name = "count_doubles")]
pub fn count_doubles_py(py: Python<'_>, val: &Bound<'_, PyAny>) -> PyResult<u64> {
    let value = host_value(val)?;
    Ok(py.allow_threads(|| bridge::count_doubles(&value))?)
}

/// Counts adjacent equal characters of `val` in a single pass.
#[pyfunction]
#[pyo3(name = "count_doubles_once")]
pub fn count_doubles_once_py(py: Python<'_>, val: &Bound<'_, PyAny>) -> PyResult<u64> {
    let value = host_value(val)?;
    Ok(py.allow_threads(|| bridge::count_doubles_once(&value))?)
}

/// Counts adjacent equal UTF-8 bytes of `val` in a single pass.
#[pyfunction]
#[pyo3(name = "count_doubles_once_bytes")]
pub fn count_doubles_once_bytes_py(py: Python<'_>, val: &Bound<'_, PyAny>) -> PyResult<u64> {
    let value = host_value(val)?;
    Ok(py.allow_threads(|| bridge::count_doubles_once_bytes(&value))?)
}

/// Counts with an explicit `unit` ("bytes" | "chars") and `traversal`
/// ("forward" | "backward" | "single_pass"). A `config_json` document such as
/// `{"unit": "chars"}` replaces both options; missing fields take the defaults.
#[pyfunction]
#[pyo3(name = "count_doubles_with")]
#[pyo3(signature = (val, unit = "bytes", traversal = "forward", config_json = None))]
pub fn count_doubles_with_py(
    py: Python<'_>,
    val: &Bound<'_, PyAny>,
    unit: &str,
    traversal: &str,
    config_json: Option<&str>,
) -> PyResult<u64> {
    // Type check first, so a bad argument wins over a bad option.
    let value = host_value(val)?;
    value.text("count_doubles_with")?;
    let config = match config_json {
        Some(json) => CounterConfig::from_json(json)?,
        None => CounterConfig::from_options(unit, traversal)?,
    };
    Ok(py.allow_threads(|| bridge::count_with(&value, &config))?)
}

/// Returns a dict of byte- and character-level statistics for `val`.
#[pyfunction]
#[pyo3(name = "analyze_doubles")]
pub fn analyze_doubles_py<'py>(
    py: Python<'py>,
    val: &Bound<'_, PyAny>,
) -> PyResult<Bound<'py, PyDict>> {
    let value = host_value(val)?;
    let stats = py.allow_threads(|| bridge::analyze(&value))?;

    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("byte_len", stats.byte_len)?;
    result_dict.set_item("char_len", stats.char_len)?;
    result_dict.set_item("byte_pairs", stats.byte_pairs)?;
    result_dict.set_item("byte_doubles", stats.byte_doubles)?;
    result_dict.set_item("char_doubles", stats.char_doubles)?;

    Ok(result_dict)
}

//==================================================================================
// III. Logging
//==================================================================================

static INIT_LOGGER: Once = Once::new();

/// Installs an `Info`-level logger for the extension, overridable through
/// `RUST_LOG`. Only the first call in a process has any effect. With
/// `log_file`, records are appended to that file instead of stderr.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging")]
#[pyo3(signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    if INIT_LOGGER.is_completed() {
        return Ok(());
    }

    let file = match log_file {
        Some(filename) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(filename)
                .map_err(DoublesError::from)?,
        ),
        None => None,
    };

    let mut outcome = None;
    INIT_LOGGER.call_once(|| {
        outcome = Some(observability::install_logger(file));
    });

    match outcome {
        Some(Ok(())) => log::info!("myrustlib {} verbose logging enabled", crate::VERSION),
        Some(Err(err)) => log::warn!(
            "myrustlib could not install its logger, keeping the existing one: {}",
            err
        ),
        None => {}
    }
    Ok(())
}
