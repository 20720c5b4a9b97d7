pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod output;
pub mod rules;
pub mod stats;

pub use error::{Result, TmdlSlimError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
