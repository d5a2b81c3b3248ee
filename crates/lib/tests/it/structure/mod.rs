//! Structure integration tests
//!
//! Path resolution, deep cloning and JSON interop over `Value` trees.

mod clone_tests;
#[cfg(feature = "json")]
mod json_tests;
mod resolve_tests;
