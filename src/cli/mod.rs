pub mod commands;
pub mod evaluate;
pub mod serve;

pub use commands::{Cli, Commands};
