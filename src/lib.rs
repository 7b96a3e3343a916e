#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod logging;
pub mod preview;
pub mod selectors;
pub mod tools;

#[cfg(test)]
mod testing;

pub use error::*;
pub use preview::*;
pub use tools::types::Card;
