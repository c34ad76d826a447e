//! Domain primitives shared by the VT Partner API crates.
//!
//! Nothing in here performs I/O: request field validation, value coercion,
//! upload naming and the domain error type.

pub mod error;
pub mod types;
pub mod upload;
pub mod validation;
