//! End-to-end runs of the benchmark driver with small workloads

use order_pipeline::{order_checksum, run};
use pipeline_config::PipelineConfig;
use std::fs;
use tempfile::tempdir;
use types::{Order, OrderType, Side, Symbol};

fn small_config(messages: u64) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.workload.message_count = messages;
    config.channel.capacity = 64;
    config.recorder.capacity = 1_024;
    config
}

fn expected_checksum(config: &PipelineConfig) -> u64 {
    let workload = &config.workload;
    (0..workload.message_count)
        .map(|i| {
            let order = Order::new(
                i,
                workload.timestamp_at(i),
                Symbol::EMPTY,
                workload.price_at(i),
                workload.quantity_at(i),
                Side::Buy,
                OrderType::Market,
            );
            order_checksum(&order)
        })
        .fold(0u64, u64::wrapping_add)
}

#[test]
fn test_every_order_reaches_the_consumer() {
    let config = small_config(10_000);
    let report = run(&config).unwrap();

    assert_eq!(report.generated, 10_000);
    assert_eq!(report.parsed, 10_000);
    assert_eq!(report.decode_failures.total(), 0);
    assert_eq!(report.consumer.consumed, 10_000);
    assert_eq!(report.consumer.checksum, expected_checksum(&config));
    assert!(report.cycles_per_ns > 0.0);
}

#[test]
fn test_latency_ring_wraps_on_long_runs() {
    let config = small_config(5_000);
    let report = run(&config).unwrap();

    let stats = report.decode_cycles.stats().copied().unwrap();
    assert_eq!(stats.count, 1_024);
    assert!(stats.min <= stats.p50);
    assert!(stats.p99 <= stats.max);
    assert!(report.decode_ns.is_some());
    assert_eq!(report.push_cycles.stats().unwrap().count, 1_024);
}

#[test]
fn test_tiny_channel_still_delivers() {
    let mut config = small_config(2_000);
    config.channel.capacity = 2;
    let report = run(&config).unwrap();
    assert_eq!(report.consumer.consumed, 2_000);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = small_config(10);
    config.channel.capacity = 12;
    assert!(run(&config).is_err());
}

#[test]
fn test_report_renders_as_text_and_json() {
    let report = run(&small_config(100)).unwrap();

    let text = report.to_string();
    assert!(text.starts_with("Parsed 100 messages"));
    assert!(text.contains("Decode latency (cycles):"));
    assert!(text.contains("Median:"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["parsed"], 100);
    assert_eq!(json["decode_cycles"]["status"], "stats");
    assert_eq!(json["consumer"]["consumed"], 100);
}

#[test]
fn test_run_from_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");
    fs::write(
        &path,
        r#"
[channel]
capacity = 128

[recorder]
capacity = 256

[workload]
message_count = 300
symbol = "MSFT"
side = "sell"
order_type = "limit"
"#,
    )
    .unwrap();

    let config = PipelineConfig::load_with_prefix(Some(&path), "ORDER_PIPELINE_DRIVER_TEST").unwrap();
    let report = run(&config).unwrap();
    assert_eq!(report.consumer.consumed, 300);
    assert_eq!(report.decode_cycles.stats().unwrap().count, 256);
}
