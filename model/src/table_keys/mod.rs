use serde::{self, Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableKeySchema {
    /// Name of the partition (hash) key attribute.
    #[serde(alias = "hash_key")]
    pub hash_key: String,
}

/// Hash key attribute per table. Tables missing from the map never produce
/// capacity events.
///
/// Deserializes from `{"orders": {"hashKey": "order_id"}}`.
#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TableKeyConfig {
    tables: HashMap<String, TableKeySchema>,
}

impl TableKeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash_key(mut self, table_name: impl Into<String>, hash_key: impl Into<String>) -> Self {
        self.tables.insert(
            table_name.into(),
            TableKeySchema {
                hash_key: hash_key.into(),
            },
        );
        self
    }

    pub fn hash_key(&self, table_name: &str) -> Option<&str> {
        self.tables
            .get(table_name)
            .map(|schema| schema.hash_key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<T: Into<String>, K: Into<String>> FromIterator<(T, K)> for TableKeyConfig {
    fn from_iter<I: IntoIterator<Item = (T, K)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TableKeyConfig::new(), |config, (table, key)| {
                config.with_hash_key(table, key)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::TableKeyConfig;
    use serde_json::json;

    #[test]
    fn deserialize_table_keys_from_json() {
        let config: TableKeyConfig = serde_json::from_value(json!({
            "orders": { "hashKey": "order_id" },
            "nonces": { "hash_key": "address" },
        }))
        .unwrap();

        assert_eq!(Some("order_id"), config.hash_key("orders"));
        assert_eq!(Some("address"), config.hash_key("nonces"));
        assert_eq!(None, config.hash_key("cache"));
    }

    #[test]
    fn build_table_keys_from_pairs() {
        let config: TableKeyConfig = [("orders", "order_id"), ("keys", "key_id")]
            .into_iter()
            .collect();

        assert_eq!(Some("key_id"), config.hash_key("keys"));
        assert!(!config.is_empty());
        assert!(TableKeyConfig::new().is_empty());
    }
}
