use common::deserializers::json_from_string::deserialize_json_string;
use model::table_keys::TableKeyConfig;
use serde::{self, Deserialize};

use crate::defaults::{RequestDefaults, ReturnValuesPolicy};

#[derive(Deserialize, Clone, Debug)]
pub struct CapacityHookConfig {
    /// Hash key attribute per table, as JSON: `{"orders":{"hashKey":"order_id"}}`.
    #[serde(
        default = "default_capacity_table_keys",
        deserialize_with = "deserialize_json_string"
    )]
    pub capacity_table_keys: TableKeyConfig,

    /// Ask put/delete for `ALL_OLD` and update for `ALL_NEW` when the caller
    /// sets no `ReturnValues`.
    #[serde(default = "default_capacity_echo_written_items")]
    pub capacity_echo_written_items: bool,
}

impl CapacityHookConfig {
    pub fn request_defaults(&self) -> RequestDefaults {
        if self.capacity_echo_written_items {
            RequestDefaults::new(ReturnValuesPolicy::EchoItems)
        } else {
            RequestDefaults::new(ReturnValuesPolicy::Preserve)
        }
    }
}

fn default_capacity_table_keys() -> TableKeyConfig {
    TableKeyConfig::default()
}

fn default_capacity_echo_written_items() -> bool {
    false
}
