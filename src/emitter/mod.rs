mod responses;

pub use responses::CapacityResponse;

use model::capacity::{CapacityEvent, CapacityRecord};
use model::operation::Operation;
use model::table_keys::TableKeyConfig;
use rusoto_dynamodb::{AttributeValue, ConsumedCapacity};
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::hook::CapacityHook;
use crate::normalizer::RequestItemIndex;
use crate::result::error::ExtractionError;
use crate::Item;

/// Turns successful responses into capacity events and hands them to the hook.
#[derive(Clone)]
pub struct CapacityEmitter {
    hook: Arc<dyn CapacityHook>,
    keys: Arc<TableKeyConfig>,
}

impl CapacityEmitter {
    pub fn new(hook: Arc<dyn CapacityHook>, keys: Arc<TableKeyConfig>) -> Self {
        Self { hook, keys }
    }

    pub fn with_hook(self, hook: Arc<dyn CapacityHook>) -> Self {
        Self { hook, ..self }
    }

    pub fn keys(&self) -> &TableKeyConfig {
        &self.keys
    }

    /// Extracts the events of `response` and dispatches them without waiting
    /// for the hook.
    pub fn emit<R: CapacityResponse>(
        &self,
        operation: Operation,
        response: &R,
        index: Option<&RequestItemIndex>,
    ) {
        let events = collect_events(operation, response, index, &self.keys);
        self.dispatch(operation, events);
    }

    /// Runs the hook on a detached task, one event after the other so they
    /// arrive in the order of the response's capacity records. Each hook call
    /// gets its own task.
    fn dispatch(&self, operation: Operation, events: Vec<CapacityEvent>) {
        if events.is_empty() {
            return;
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    operation = %operation,
                    "No async runtime available, dropping {} capacity events",
                    events.len()
                );
                return;
            }
        };

        let hook = Arc::clone(&self.hook);
        let dispatcher = handle.clone();
        handle.spawn(async move {
            for event in events {
                let operation = event.operation;
                let table_name = event.table_name.clone();
                let hook = Arc::clone(&hook);

                // A panicking hook only takes its own task down.
                let recorded = dispatcher
                    .spawn(async move { hook.record(&event).await })
                    .await;

                match recorded {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!(
                        error = ?e,
                        operation = %operation,
                        table_name = %table_name,
                        "Error when recording consumed capacity: {e}"
                    ),
                    Err(e) => tracing::warn!(
                        error = ?e,
                        operation = %operation,
                        table_name = %table_name,
                        panicked = e.is_panic(),
                        "Capacity hook task failed: {e}"
                    ),
                }
            }
        });
    }
}

/// Builds one event per capacity record that has a configured hash key and at
/// least one resolvable item. Records come out in response order.
pub fn collect_events<R: CapacityResponse>(
    operation: Operation,
    response: &R,
    index: Option<&RequestItemIndex>,
    keys: &TableKeyConfig,
) -> Vec<CapacityEvent> {
    response
        .consumed_capacity()
        .into_iter()
        .filter_map(|capacity| match capacity_record(capacity) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(operation = %operation, "Skipping capacity record: {e}");
                None
            }
        })
        .filter_map(|record| {
            let Some(hash_key) = keys.hash_key(&record.table_name) else {
                tracing::trace!(
                    operation = %operation,
                    table_name = %record.table_name,
                    "No hash key configured, capacity event suppressed"
                );
                return None;
            };

            let items = resolve_items(response, index, &record.table_name);
            if items.is_empty() {
                tracing::debug!(
                    operation = %operation,
                    table_name = %record.table_name,
                    "No items resolved, capacity event suppressed"
                );
                return None;
            }

            let values = items.into_iter().map(|item| hash_key_value(item, hash_key));
            Some(CapacityEvent::new(operation, record, values))
        })
        .collect()
}

fn capacity_record(capacity: &ConsumedCapacity) -> Result<CapacityRecord, ExtractionError> {
    let table_name = capacity
        .table_name
        .clone()
        .ok_or(ExtractionError::MissingTableName)?;
    let capacity_units = capacity
        .capacity_units
        .ok_or_else(|| ExtractionError::MissingCapacityUnits(table_name.clone()))?;

    Ok(CapacityRecord {
        table_name,
        capacity_units,
    })
}

/// Request index first, response body second.
fn resolve_items<'a, R: CapacityResponse>(
    response: &'a R,
    index: Option<&'a RequestItemIndex>,
    table_name: &str,
) -> Vec<&'a Item> {
    match index.and_then(|index| index.items(table_name)) {
        Some(items) => items.iter().collect(),
        None => response.returned_items(table_name),
    }
}

/// String, then number, then binary. Anything else reads as an empty string.
pub fn hash_key_value(item: &Item, hash_key: &str) -> String {
    item.get(hash_key)
        .and_then(scalar_value)
        .unwrap_or_default()
}

fn scalar_value(value: &AttributeValue) -> Option<String> {
    let non_empty = |v: &&String| !v.is_empty();

    value
        .s
        .as_ref()
        .filter(non_empty)
        .or_else(|| value.n.as_ref().filter(non_empty))
        .cloned()
        .or_else(|| {
            value
                .b
                .as_ref()
                .filter(|bytes| !bytes.is_empty())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        })
}
