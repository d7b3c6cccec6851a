//! Status command implementation
//!
//! This module implements the `status` command: load the configured data
//! file and print the record count plus a verdict breakdown.

use crate::config::load_config;
use crate::domain::{round2, verdict_for_bmi, StorageError, VitalisError};
use crate::storage::{JsonFileStore, RecordStore};
use clap::Args;
use serde_json::Value;
use std::collections::BTreeMap;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Reading collection status");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("📊 Vitalis Status");
        println!();
        println!("  Data file: {}", config.storage.data_path);

        let store = JsonFileStore::new(&config.storage.data_path);
        let collection = match store.load().await {
            Ok(c) => c,
            Err(VitalisError::Storage(StorageError::Missing(path))) => {
                println!("  No data file yet: {path}");
                println!("  Run `vitalis serve` with storage.create_if_missing = true");
                return Ok(0);
            }
            Err(e) => {
                println!("❌ Failed to load patient collection");
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("  Records: {}", collection.len());

        let breakdown = verdict_breakdown(collection.values());
        if !breakdown.is_empty() {
            println!();
            println!("  Verdict breakdown:");
            for (verdict, count) in &breakdown {
                println!("    {verdict}: {count}");
            }
        }

        println!();
        Ok(0)
    }
}

/// Tallies verdicts across stored records
///
/// Records without usable height/weight attributes are counted as Unknown
/// rather than skipped, so the totals always add up to the record count.
fn verdict_breakdown<'a>(records: impl Iterator<Item = &'a Value>) -> BTreeMap<String, usize> {
    let mut breakdown = BTreeMap::new();
    for attributes in records {
        let height = attributes.get("height").and_then(Value::as_f64);
        let weight = attributes.get("weight").and_then(Value::as_f64);
        let verdict = match (height, weight) {
            (Some(height), Some(weight)) if height > 0.0 => {
                verdict_for_bmi(round2(weight / (height * height)))
            }
            _ => "Unknown",
        };
        *breakdown.entry(verdict.to_string()).or_insert(0) += 1;
    }
    breakdown
}
