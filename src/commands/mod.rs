pub mod config;
mod check;
mod serve;

pub use check::{check, format_file_size, report};
pub use config::Config;
pub use serve::serve;
