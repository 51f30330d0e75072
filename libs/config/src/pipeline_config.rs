//! Pipeline Configuration Module
//!
//! Loading order, later sources win:
//! 1. Serde defaults (see [`crate::defaults`])
//! 2. TOML file, when a path is given
//! 3. Environment variables, e.g. `ORDER_PIPELINE__CHANNEL__CAPACITY=8192`

use crate::defaults;
use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use types::{OrderType, Side, Symbol};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ORDER_PIPELINE";

/// Separator between prefix and nested keys
pub const ENV_SEPARATOR: &str = "__";

/// Main pipeline configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub channel: ChannelSettings,
    pub recorder: RecorderSettings,
    pub workload: WorkloadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChannelSettings {
    /// Ring slots; power of two, at least 2
    pub capacity: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RecorderSettings {
    /// Samples kept before the oldest are overwritten
    pub capacity: usize,
}

/// Synthetic order stream
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorkloadSettings {
    pub message_count: u64,
    pub symbol: String,
    pub base_price: f64,
    pub price_step: f64,
    pub base_timestamp_ns: u64,
    pub side: Side,
    pub order_type: OrderType,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. "info" or "codec=trace"
    pub level: String,
    pub json: bool,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            capacity: defaults::CHANNEL_CAPACITY,
        }
    }
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            capacity: defaults::RECORDER_CAPACITY,
        }
    }
}

impl Default for WorkloadSettings {
    fn default() -> Self {
        Self {
            message_count: defaults::MESSAGE_COUNT,
            symbol: defaults::SYMBOL.to_string(),
            base_price: defaults::BASE_PRICE,
            price_step: defaults::PRICE_STEP,
            base_timestamp_ns: defaults::BASE_TIMESTAMP_NS,
            side: Side::Buy,
            order_type: OrderType::Market,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl WorkloadSettings {
    /// Price of the `i`-th generated order
    pub fn price_at(&self, i: u64) -> f64 {
        self.base_price + i as f64 * self.price_step
    }

    /// Quantity of the `i`-th generated order
    pub fn quantity_at(&self, i: u64) -> u32 {
        defaults::QUANTITY_BASE + (i % u64::from(defaults::QUANTITY_CYCLE)) as u32
    }

    /// Timestamp of the `i`-th generated order
    pub fn timestamp_at(&self, i: u64) -> u64 {
        self.base_timestamp_ns.wrapping_add(i)
    }
}

impl PipelineConfig {
    /// Load configuration from an optional file with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`load`](Self::load) with a custom environment prefix
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading pipeline config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        } else {
            debug!("No config file given, using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        debug!(?config, "pipeline config loaded");
        Ok(config)
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        let capacity = self.channel.capacity;
        ensure!(
            capacity >= 2 && capacity.is_power_of_two(),
            "channel.capacity must be a power of two and at least 2, got {capacity}"
        );
        ensure!(
            self.recorder.capacity > 0,
            "recorder.capacity must be greater than zero"
        );
        ensure!(
            self.workload.message_count > 0,
            "workload.message_count must be greater than zero"
        );
        ensure!(
            self.workload.base_price > 0.0,
            "workload.base_price must be greater than zero, got {}",
            self.workload.base_price
        );
        ensure!(
            self.workload.price_step >= 0.0,
            "workload.price_step must not be negative, got {}",
            self.workload.price_step
        );
        Symbol::new(&self.workload.symbol)
            .with_context(|| format!("workload.symbol {:?} is invalid", self.workload.symbol))?;
        Ok(())
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
