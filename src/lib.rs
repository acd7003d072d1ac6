pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod language;
pub mod output;

pub use error::{Result, TallyError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_UNTERMINATED_BLOCK: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
