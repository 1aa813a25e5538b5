use serde::{self, Deserialize, Serialize};
use std::collections::HashSet;

use crate::operation::Operation;

/// Consumed capacity reported by DynamoDB for one table.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct CapacityRecord {
    pub table_name: String,
    pub capacity_units: f64,
}

/// What the hook receives: one per table touched by a call.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct CapacityEvent {
    pub operation: Operation,
    pub table_name: String,
    pub capacity_units: f64,
    pub hash_key_values: Vec<String>,
}

impl CapacityEvent {
    /// Builds an event, dropping repeated hash key values while keeping the
    /// order in which they were first seen.
    pub fn new<I>(operation: Operation, record: CapacityRecord, hash_key_values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let unique: Vec<String> = hash_key_values
            .into_iter()
            .filter(|value| seen.insert(value.clone()))
            .collect();

        Self {
            operation,
            table_name: record.table_name,
            capacity_units: record.capacity_units,
            hash_key_values: unique,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CapacityEvent, CapacityRecord};
    use crate::operation::Operation;

    #[test]
    fn repeated_hash_keys_count_once() {
        let record = CapacityRecord {
            table_name: "orders".to_owned(),
            capacity_units: 2.5,
        };
        let event = CapacityEvent::new(
            Operation::BatchWriteItem,
            record,
            ["b", "a", "b", "c", "a"].map(String::from),
        );

        assert_eq!(vec!["b", "a", "c"], event.hash_key_values);
        assert_eq!("orders", event.table_name);
        assert_eq!(2.5, event.capacity_units);
    }

    #[test]
    fn large_key_sets_keep_first_seen_order() {
        let record = CapacityRecord {
            table_name: "orders".to_owned(),
            capacity_units: 128.0,
        };
        let keys: Vec<String> = (0..20_000).map(|i| format!("key-{i}")).collect();

        let event = CapacityEvent::new(
            Operation::Scan,
            record,
            keys.iter().chain(keys.iter()).cloned(),
        );

        assert_eq!(keys, event.hash_key_values);
    }
}
