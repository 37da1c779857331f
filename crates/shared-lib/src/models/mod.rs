//! 共享数据模型

pub mod config;

pub use config::{AppConfig, StorageConfig};
