//! This file is the root of the `myrustlib` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`, `bridge`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (feature `python`).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[doc(hidden)]
pub use log; // Lets `log_metric!` resolve the facade from any crate.

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;

#[cfg(feature = "python")]
mod ffi;

pub use bridge::{DoubleStats, HostValue};
pub use config::{CountUnit, CounterConfig, Traversal};
pub use error::DoublesError;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `myrustlib` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn myrustlib(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__doc__", "This module is implemented in Rust")?;

    // --- Counting API ---
    m.add_function(wrap_pyfunction!(ffi::count_doubles_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::count_doubles_once_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::count_doubles_once_bytes_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::count_doubles_with_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::analyze_doubles_py, m)?)?;

    // --- Expose the argument error type ---
    m.add(
        "ArgumentTypeError",
        m.py().get_type_bound::<pyo3::exceptions::PyTypeError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
