//! Error taxonomy: domain errors and their canonical codes.

pub mod domain;
pub mod error_code;

pub use error_code::ErrorCode;
