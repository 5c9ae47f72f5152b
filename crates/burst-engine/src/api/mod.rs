pub mod config;
pub mod egg;
pub mod types;
