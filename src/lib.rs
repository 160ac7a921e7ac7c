pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod session;
pub mod table;
