// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of myrustlib. It is the authoritative
// boundary between host values (whatever the Python caller passed) and the pure
// counting kernels.
//
// Data Flow:
//
//   1. [FFI shim (ffi::python)]           -> Receives `&Bound<PyAny>`
//         |
//         `-> classifies it once into `HostValue::{Text, Other}`
//
//   2. [Stateless API (count_doubles, ...)] -> Receives `&HostValue`
//         |
//         `-> a. Capability check: `HostValue::utf8_bytes` / `HostValue::text`
//         |      (`Other` stops here with `InvalidArgumentType`)
//         |
//         `-> b. Calls the pure kernel with a borrowed `&[u8]` / `&str`
//
//   3. [Kernels]                           -> Returns `u64`
//
// ====================================================================================
pub mod format;
pub mod host_value;
pub mod stateless_api;

pub use format::DoubleStats;
pub use host_value::HostValue;
pub use stateless_api::{
    analyze, count_doubles, count_doubles_once, count_doubles_once_bytes, count_with,
};
