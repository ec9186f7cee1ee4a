//! Configuration for pr-report
//!
//! This crate provides:
//! - Configuration file discovery (`.pr-report.toml`)
//! - Application configuration (AppConfig) with built-in defaults

pub mod app_config;
pub mod config_file;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, CONFIG_FILE};
