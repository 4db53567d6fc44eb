//! This module serves as the public API for the Foreign Function Interface (FFI) layer.
//!
//! Its primary responsibility is to declare the sub-modules that handle the
//! "impedance mismatch" between the host runtime and the pure Rust bridge.
//! Currently, it only contains the Python shims.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    analyze_doubles_py, count_doubles_once_bytes_py, count_doubles_once_py, count_doubles_py,
    count_doubles_with_py, enable_verbose_logging_py,
};
