//! # Order Pipeline Configuration
//!
//! Loads the benchmark driver's settings from an optional TOML file with
//! `ORDER_PIPELINE__*` environment overrides on top. Every field has a
//! default, so an empty file (or no file) is a valid configuration.
//!
//! ## Usage
//!
//! ```rust
//! use pipeline_config::PipelineConfig;
//!
//! let config = PipelineConfig::default();
//! assert_eq!(config.channel.capacity, pipeline_config::defaults::CHANNEL_CAPACITY);
//! config.validate().unwrap();
//! ```
//!
//! The core crates never depend on this one; only the driver does.

pub mod defaults;
pub mod pipeline_config;

pub use pipeline_config::{
    ChannelSettings, LoggingSettings, PipelineConfig, RecorderSettings, WorkloadSettings,
    ENV_PREFIX, ENV_SEPARATOR,
};
