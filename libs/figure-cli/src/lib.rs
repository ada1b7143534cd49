//! figure-cli - library side of the `generator` tool
//!
//! Shape construction and file output live here so they can be tested
//! without going through argument parsing.

pub mod generate;
pub mod inspect;

pub use generate::{build, generate, Figure};
pub use inspect::{inspect, summarize};
