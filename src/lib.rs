pub mod cli;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;
