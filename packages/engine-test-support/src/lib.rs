//! Shared helpers for engine tests.

pub mod logging;
