pub mod asset;
pub mod commands;
pub mod downloads;
pub mod github;
pub mod http;
pub mod server;
