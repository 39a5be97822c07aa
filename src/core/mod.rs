//! Core utilities shared by every layer: console logging and the error type.
//!
//! `log` must stay first so its macros are visible to the rest of the crate.

#[macro_use]
pub mod log;
pub mod error;
