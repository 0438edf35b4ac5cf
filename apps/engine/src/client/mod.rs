//! In-process client surface: the per-connection driver a frontend embeds.

mod driver;

pub use driver::TableDriver;
