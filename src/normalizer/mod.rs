//! Works out, from an outgoing request, which items each table is about to
//! touch.
//!
//! Writes such as `update_item` or `delete_item` do not echo the item back
//! unless `ReturnValues` asks for it, so the request is the only reliable
//! source for the hash keys involved. Query, scan and the PartiQL statements
//! produce no index: their rows are only known once the response arrives.

use rusoto_dynamodb::{
    BatchExecuteStatementInput, BatchGetItemInput, BatchWriteItemInput, DeleteItemInput,
    ExecuteStatementInput, ExecuteTransactionInput, GetItemInput, PutItemInput, QueryInput,
    ScanInput, TransactGetItemsInput, TransactWriteItem, TransactWriteItemsInput, UpdateItemInput,
    WriteRequest,
};
use std::collections::HashMap;

use crate::Item;

/// Items (or keys) per table, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestItemIndex {
    tables: HashMap<String, Vec<Item>>,
}

impl RequestItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(table_name: &str, item: &Item) -> Self {
        let mut index = Self::new();
        index.insert(table_name, item.clone());
        index
    }

    pub fn insert(&mut self, table_name: &str, item: Item) {
        self.tables
            .entry(table_name.to_owned())
            .or_default()
            .push(item);
    }

    /// `None` when the request named nothing for `table_name`.
    pub fn items(&self, table_name: &str) -> Option<&[Item]> {
        self.tables
            .get(table_name)
            .map(Vec::as_slice)
            .filter(|items| !items.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(Vec::is_empty)
    }
}

pub trait IndexRequestItems {
    /// `None` means the operation has no request side index.
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        None
    }
}

impl IndexRequestItems for GetItemInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        Some(RequestItemIndex::single(&self.table_name, &self.key))
    }
}

impl IndexRequestItems for PutItemInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        Some(RequestItemIndex::single(&self.table_name, &self.item))
    }
}

impl IndexRequestItems for UpdateItemInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        Some(RequestItemIndex::single(&self.table_name, &self.key))
    }
}

impl IndexRequestItems for DeleteItemInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        Some(RequestItemIndex::single(&self.table_name, &self.key))
    }
}

impl IndexRequestItems for BatchGetItemInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        let mut index = RequestItemIndex::new();
        for (table_name, keys_and_attributes) in &self.request_items {
            for key in &keys_and_attributes.keys {
                index.insert(table_name, key.clone());
            }
        }
        Some(index)
    }
}

fn written_item(request: &WriteRequest) -> Option<&Item> {
    request
        .put_request
        .as_ref()
        .map(|put| &put.item)
        .or_else(|| request.delete_request.as_ref().map(|delete| &delete.key))
}

impl IndexRequestItems for BatchWriteItemInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        let mut index = RequestItemIndex::new();
        for (table_name, requests) in &self.request_items {
            for item in requests.iter().filter_map(written_item) {
                index.insert(table_name, item.clone());
            }
        }
        Some(index)
    }
}

impl IndexRequestItems for TransactGetItemsInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        let mut index = RequestItemIndex::new();
        for transact_item in &self.transact_items {
            index.insert(&transact_item.get.table_name, transact_item.get.key.clone());
        }
        Some(index)
    }
}

/// The one sub operation a transact write entry carries, as `(table, item)`.
fn transact_write_target(entry: &TransactWriteItem) -> Option<(&str, &Item)> {
    if let Some(put) = &entry.put {
        return Some((put.table_name.as_str(), &put.item));
    }
    if let Some(update) = &entry.update {
        return Some((update.table_name.as_str(), &update.key));
    }
    if let Some(delete) = &entry.delete {
        return Some((delete.table_name.as_str(), &delete.key));
    }
    entry
        .condition_check
        .as_ref()
        .map(|check| (check.table_name.as_str(), &check.key))
}

impl IndexRequestItems for TransactWriteItemsInput {
    fn request_item_index(&self) -> Option<RequestItemIndex> {
        let mut index = RequestItemIndex::new();
        for (table_name, item) in self.transact_items.iter().filter_map(transact_write_target) {
            index.insert(table_name, item.clone());
        }
        Some(index)
    }
}

impl IndexRequestItems for QueryInput {}

impl IndexRequestItems for ScanInput {}

impl IndexRequestItems for ExecuteStatementInput {}

impl IndexRequestItems for ExecuteTransactionInput {}

impl IndexRequestItems for BatchExecuteStatementInput {}

#[cfg(test)]
mod tests {
    use super::{IndexRequestItems, RequestItemIndex};
    use crate::Item;
    use rstest::rstest;
    use rusoto_dynamodb::{
        AttributeValue, BatchGetItemInput, BatchWriteItemInput, ConditionCheck, Delete,
        DeleteRequest, Get, GetItemInput, KeysAndAttributes, Put, PutRequest, QueryInput,
        ScanInput, TransactGetItem, TransactGetItemsInput, TransactWriteItem,
        TransactWriteItemsInput, Update, UpdateItemInput, WriteRequest,
    };
    use std::collections::HashMap;

    fn key(value: &str) -> Item {
        HashMap::from([(
            "pk".to_owned(),
            AttributeValue {
                s: Some(value.to_owned()),
                ..AttributeValue::default()
            },
        )])
    }

    fn values(index: &RequestItemIndex, table_name: &str) -> Vec<String> {
        index
            .items(table_name)
            .unwrap_or_default()
            .iter()
            .filter_map(|item| item.get("pk").and_then(|value| value.s.clone()))
            .collect()
    }

    #[test]
    fn single_item_requests_index_their_key() {
        let index = GetItemInput {
            table_name: "orders".to_owned(),
            key: key("a"),
            ..GetItemInput::default()
        }
        .request_item_index()
        .unwrap();
        assert_eq!(vec!["a"], values(&index, "orders"));

        let index = UpdateItemInput {
            table_name: "orders".to_owned(),
            key: key("b"),
            ..UpdateItemInput::default()
        }
        .request_item_index()
        .unwrap();
        assert_eq!(vec!["b"], values(&index, "orders"));
        assert!(index.items("keys").is_none());
    }

    #[test]
    fn batch_get_groups_keys_per_table() {
        let input = BatchGetItemInput {
            request_items: HashMap::from([
                (
                    "orders".to_owned(),
                    KeysAndAttributes {
                        keys: vec![key("a"), key("b")],
                        ..KeysAndAttributes::default()
                    },
                ),
                (
                    "keys".to_owned(),
                    KeysAndAttributes {
                        keys: vec![key("c")],
                        ..KeysAndAttributes::default()
                    },
                ),
            ]),
            ..BatchGetItemInput::default()
        };

        let index = input.request_item_index().unwrap();
        assert_eq!(vec!["a", "b"], values(&index, "orders"));
        assert_eq!(vec!["c"], values(&index, "keys"));
    }

    #[test]
    fn batch_write_takes_put_items_and_delete_keys() {
        let input = BatchWriteItemInput {
            request_items: HashMap::from([(
                "orders".to_owned(),
                vec![
                    WriteRequest {
                        put_request: Some(PutRequest { item: key("a") }),
                        delete_request: None,
                    },
                    WriteRequest {
                        put_request: None,
                        delete_request: Some(DeleteRequest { key: key("b") }),
                    },
                    WriteRequest {
                        put_request: None,
                        delete_request: None,
                    },
                ],
            )]),
            ..BatchWriteItemInput::default()
        };

        let index = input.request_item_index().unwrap();
        assert_eq!(vec!["a", "b"], values(&index, "orders"));
    }

    #[test]
    fn transact_get_groups_per_table() {
        let get = |table_name: &str, value: &str| TransactGetItem {
            get: Get {
                table_name: table_name.to_owned(),
                key: key(value),
                ..Get::default()
            },
        };
        let input = TransactGetItemsInput {
            transact_items: vec![get("orders", "a"), get("keys", "b"), get("orders", "c")],
            ..TransactGetItemsInput::default()
        };

        let index = input.request_item_index().unwrap();
        assert_eq!(vec!["a", "c"], values(&index, "orders"));
        assert_eq!(vec!["b"], values(&index, "keys"));
    }

    #[test]
    fn transact_write_uses_every_sub_operation_kind() {
        let input = TransactWriteItemsInput {
            transact_items: vec![
                TransactWriteItem {
                    put: Some(Put {
                        table_name: "orders".to_owned(),
                        item: key("put"),
                        ..Put::default()
                    }),
                    ..TransactWriteItem::default()
                },
                TransactWriteItem {
                    update: Some(Update {
                        table_name: "orders".to_owned(),
                        key: key("update"),
                        ..Update::default()
                    }),
                    ..TransactWriteItem::default()
                },
                TransactWriteItem {
                    delete: Some(Delete {
                        table_name: "keys".to_owned(),
                        key: key("delete"),
                        ..Delete::default()
                    }),
                    ..TransactWriteItem::default()
                },
                TransactWriteItem {
                    condition_check: Some(ConditionCheck {
                        table_name: "keys".to_owned(),
                        key: key("check"),
                        ..ConditionCheck::default()
                    }),
                    ..TransactWriteItem::default()
                },
                TransactWriteItem::default(),
            ],
            ..TransactWriteItemsInput::default()
        };

        let index = input.request_item_index().unwrap();
        assert_eq!(vec!["put", "update"], values(&index, "orders"));
        assert_eq!(vec!["delete", "check"], values(&index, "keys"));
    }

    #[rstest]
    #[case(QueryInput::default().request_item_index())]
    #[case(ScanInput::default().request_item_index())]
    fn reads_without_keys_have_no_index(#[case] index: Option<RequestItemIndex>) {
        assert!(index.is_none());
    }

    #[test]
    fn empty_batch_yields_empty_index() {
        let index = BatchGetItemInput::default().request_item_index().unwrap();
        assert!(index.is_empty());
        assert!(index.items("orders").is_none());
    }
}
