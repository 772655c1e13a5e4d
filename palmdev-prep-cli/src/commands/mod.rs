//! Command implementations.

pub mod common;
pub mod prep;
pub mod remove;
