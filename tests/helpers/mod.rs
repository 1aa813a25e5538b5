use ddb_capacity_hook::hook::{CapacityHook, FnHook};
use ddb_capacity_hook::model::capacity::CapacityEvent;
use ddb_capacity_hook::result::error::CapacityHookError;
use ddb_capacity_hook::Item;
use rusoto_dynamodb::{AttributeValue, ConsumedCapacity};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const TABLE_NAME: &str = "table-name";
pub const SECOND_TABLE_NAME: &str = "table-name-2";
pub const HASH_KEY: &str = "hashKey";

const EVENT_TIMEOUT: Duration = Duration::from_secs(1);
const QUIET_PERIOD: Duration = Duration::from_millis(50);

/// Hook forwarding every event into a channel the test reads from.
pub fn channel_hook() -> (impl CapacityHook, UnboundedReceiver<CapacityEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let hook = FnHook::new(move |event: &CapacityEvent| {
        sender
            .send(event.clone())
            .map_err(|e| CapacityHookError::from(anyhow::anyhow!("receiver dropped: {e}")))
    });
    (hook, receiver)
}

pub async fn next_events(
    receiver: &mut UnboundedReceiver<CapacityEvent>,
    count: usize,
) -> Vec<CapacityEvent> {
    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let event = tokio::time::timeout(EVENT_TIMEOUT, receiver.recv())
            .await
            .expect("Timed out waiting for a capacity event")
            .expect("Hook channel closed");
        events.push(event);
    }
    events
}

pub async fn assert_no_events(receiver: &mut UnboundedReceiver<CapacityEvent>) {
    tokio::time::sleep(QUIET_PERIOD).await;
    let received = receiver.try_recv();
    assert!(received.is_err(), "Unexpected capacity event: {received:?}");
}

pub fn key(hash_key: &str) -> Item {
    HashMap::from([(
        HASH_KEY.to_owned(),
        AttributeValue {
            s: Some(hash_key.to_owned()),
            ..AttributeValue::default()
        },
    )])
}

pub fn item(hash_key: &str) -> Item {
    let mut item = key(hash_key);
    item.insert(
        "amount".to_owned(),
        AttributeValue {
            n: Some("10".to_owned()),
            ..AttributeValue::default()
        },
    );
    item
}

pub fn capacity(table_name: &str, capacity_units: f64) -> ConsumedCapacity {
    ConsumedCapacity {
        table_name: Some(table_name.to_owned()),
        capacity_units: Some(capacity_units),
        ..ConsumedCapacity::default()
    }
}

pub fn hash_keys(count: usize, prefix: &str) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}-{i}")).collect()
}

/// Events keyed by table, hash key values as sets.
pub fn by_table(events: &[CapacityEvent]) -> HashMap<String, HashSet<String>> {
    events
        .iter()
        .map(|event| {
            (
                event.table_name.clone(),
                event.hash_key_values.iter().cloned().collect(),
            )
        })
        .collect()
}
