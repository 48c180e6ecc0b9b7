//! Utilities which are used throughout the crate.

pub mod math;
