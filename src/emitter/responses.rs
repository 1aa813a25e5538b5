use rusoto_dynamodb::{
    BatchExecuteStatementOutput, BatchGetItemOutput, BatchWriteItemOutput, ConsumedCapacity,
    DeleteItemOutput, ExecuteStatementOutput, ExecuteTransactionOutput, GetItemOutput,
    PutItemOutput, QueryOutput, ScanOutput, TransactGetItemsOutput, TransactWriteItemsOutput,
    UpdateItemOutput,
};

use crate::Item;

/// Read side of a response: its capacity records and the rows it carries.
///
/// `returned_items` is only consulted for tables the request index has
/// nothing for. Its priority is the single echoed item, then the item list,
/// then the echoed attributes, then the per table response groups.
pub trait CapacityResponse {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        Vec::new()
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        Vec::new()
    }
}

fn single(capacity: &Option<ConsumedCapacity>) -> Vec<&ConsumedCapacity> {
    capacity.iter().collect()
}

fn many(capacity: &Option<Vec<ConsumedCapacity>>) -> Vec<&ConsumedCapacity> {
    capacity.iter().flatten().collect()
}

impl CapacityResponse for GetItemOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        single(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.item.iter().collect()
    }
}

impl CapacityResponse for PutItemOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        single(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.attributes.iter().collect()
    }
}

impl CapacityResponse for UpdateItemOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        single(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.attributes.iter().collect()
    }
}

impl CapacityResponse for DeleteItemOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        single(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.attributes.iter().collect()
    }
}

impl CapacityResponse for QueryOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        single(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.items.iter().flatten().collect()
    }
}

impl CapacityResponse for ScanOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        single(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.items.iter().flatten().collect()
    }
}

impl CapacityResponse for BatchGetItemOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        many(&self.consumed_capacity)
    }

    fn returned_items(&self, table_name: &str) -> Vec<&Item> {
        self.responses
            .iter()
            .filter_map(|responses| responses.get(table_name))
            .flatten()
            .collect()
    }
}

// Nothing comes back for a batch write besides unprocessed items.
impl CapacityResponse for BatchWriteItemOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        many(&self.consumed_capacity)
    }
}

impl CapacityResponse for TransactGetItemsOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        many(&self.consumed_capacity)
    }

    fn returned_items(&self, _table_name: &str) -> Vec<&Item> {
        self.responses
            .iter()
            .flatten()
            .filter_map(|response| response.item.as_ref())
            .collect()
    }
}

impl CapacityResponse for TransactWriteItemsOutput {
    fn consumed_capacity(&self) -> Vec<&ConsumedCapacity> {
        many(&self.consumed_capacity)
    }
}

impl CapacityResponse for ExecuteStatementOutput {}

impl CapacityResponse for ExecuteTransactionOutput {}

impl CapacityResponse for BatchExecuteStatementOutput {}

#[cfg(test)]
mod tests {
    use super::CapacityResponse;
    use crate::Item;
    use rusoto_dynamodb::{
        AttributeValue, BatchGetItemOutput, ConsumedCapacity, ItemResponse, QueryOutput,
        TransactGetItemsOutput, UpdateItemOutput,
    };
    use std::collections::HashMap;

    fn item(value: &str) -> Item {
        HashMap::from([(
            "pk".to_owned(),
            AttributeValue {
                s: Some(value.to_owned()),
                ..AttributeValue::default()
            },
        )])
    }

    fn capacity(table_name: &str, units: f64) -> ConsumedCapacity {
        ConsumedCapacity {
            table_name: Some(table_name.to_owned()),
            capacity_units: Some(units),
            ..ConsumedCapacity::default()
        }
    }

    #[test]
    fn absent_capacity_is_empty() {
        assert!(QueryOutput::default().consumed_capacity().is_empty());
        assert!(BatchGetItemOutput::default().consumed_capacity().is_empty());
    }

    #[test]
    fn update_returns_echoed_attributes() {
        let output = UpdateItemOutput {
            attributes: Some(item("a")),
            consumed_capacity: Some(capacity("orders", 1.0)),
            ..UpdateItemOutput::default()
        };

        assert_eq!(1, output.consumed_capacity().len());
        assert_eq!(vec![&item("a")], output.returned_items("orders"));
    }

    #[test]
    fn batch_get_returns_only_the_requested_table_group() {
        let output = BatchGetItemOutput {
            consumed_capacity: Some(vec![capacity("orders", 1.0), capacity("keys", 0.5)]),
            responses: Some(HashMap::from([
                ("orders".to_owned(), vec![item("a"), item("b")]),
                ("keys".to_owned(), vec![item("c")]),
            ])),
            ..BatchGetItemOutput::default()
        };

        let tables: Vec<_> = output
            .consumed_capacity()
            .into_iter()
            .filter_map(|capacity| capacity.table_name.as_deref())
            .collect();
        assert_eq!(vec!["orders", "keys"], tables);
        assert_eq!(2, output.returned_items("orders").len());
        assert_eq!(vec![&item("c")], output.returned_items("keys"));
        assert!(output.returned_items("cache").is_empty());
    }

    #[test]
    fn transact_get_skips_missing_items() {
        let output = TransactGetItemsOutput {
            responses: Some(vec![
                ItemResponse {
                    item: Some(item("a")),
                },
                ItemResponse { item: None },
            ]),
            ..TransactGetItemsOutput::default()
        };

        assert_eq!(vec![&item("a")], output.returned_items("orders"));
    }
}
