//! Reads one item through the instrumented client and logs the capacity event
//! it produces.
//!
//! Needs `AWS_REGION`, `CAPACITY_TABLE_KEYS`, `PROBE_TABLE_NAME` and
//! `PROBE_HASH_KEY_VALUE`. `LOCALSTACK_TEST_MODE_ENDPOINT` points it at
//! LocalStack.

use anyhow::anyhow;
use common::config::ConfigLoader;
use common::logging::init_tracing;
use ddb_capacity_hook::hook::FnHook;
use ddb_capacity_hook::model::capacity::CapacityEvent;
use ddb_capacity_hook::result::error::CapacityHookError;
use ddb_capacity_hook::InstrumentedDynamoDb;
use rusoto_dynamodb::{AttributeValue, DynamoDb, GetItemInput};
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::filter::LevelFilter;

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize, Debug)]
struct ProbeConfig {
    probe_table_name: String,
    probe_hash_key_value: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load_default::<ProbeConfig>().await?;

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
    let _guard = init_tracing(app_name, LevelFilter::from_str(&config.log_level)?)?;

    let (sender, mut receiver) = mpsc::unbounded_channel::<CapacityEvent>();
    let client = InstrumentedDynamoDb::from_env()
        .await?
        .with_hook(FnHook::new(move |event: &CapacityEvent| {
            sender
                .send(event.clone())
                .map_err(|e| CapacityHookError::from(anyhow!("probe receiver closed: {e}")))
        }));

    let hash_key = client
        .table_keys()
        .hash_key(&config.probe_table_name)
        .ok_or_else(|| {
            anyhow!(
                "No hash key configured for table {}",
                config.probe_table_name
            )
        })?
        .to_owned();

    let key = HashMap::from([(
        hash_key,
        AttributeValue {
            s: Some(config.probe_hash_key_value.clone()),
            ..AttributeValue::default()
        },
    )]);

    let output = client
        .get_item(GetItemInput {
            table_name: config.probe_table_name.clone(),
            key,
            ..GetItemInput::default()
        })
        .await
        .map_err(|e| anyhow!(e).context("Probe get_item failed"))?;

    tracing::info!(
        table_name = %config.probe_table_name,
        found = output.item.is_some(),
        "Probe read finished"
    );

    match tokio::time::timeout(EVENT_TIMEOUT, receiver.recv()).await {
        Ok(Some(event)) => tracing::info!(
            operation = %event.operation,
            capacity_units = event.capacity_units,
            hash_key_values = ?event.hash_key_values,
            "Capacity event received"
        ),
        Ok(None) | Err(_) => tracing::warn!(
            table_name = %config.probe_table_name,
            "No capacity event received within the timeout"
        ),
    }

    Ok(())
}
