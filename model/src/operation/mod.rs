use anyhow::anyhow;
use serde::{self, Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// DynamoDB operations that report consumed capacity through the hook.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    GetItem,
    PutItem,
    UpdateItem,
    DeleteItem,
    BatchGetItem,
    BatchWriteItem,
    Query,
    Scan,
    TransactGetItems,
    TransactWriteItems,
    ExecuteStatement,
    ExecuteTransaction,
    BatchExecuteStatement,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::GetItem,
        Operation::PutItem,
        Operation::UpdateItem,
        Operation::DeleteItem,
        Operation::BatchGetItem,
        Operation::BatchWriteItem,
        Operation::Query,
        Operation::Scan,
        Operation::TransactGetItems,
        Operation::TransactWriteItems,
        Operation::ExecuteStatement,
        Operation::ExecuteTransaction,
        Operation::BatchExecuteStatement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetItem => "getItem",
            Operation::PutItem => "putItem",
            Operation::UpdateItem => "updateItem",
            Operation::DeleteItem => "deleteItem",
            Operation::BatchGetItem => "batchGetItem",
            Operation::BatchWriteItem => "batchWriteItem",
            Operation::Query => "query",
            Operation::Scan => "scan",
            Operation::TransactGetItems => "transactGetItems",
            Operation::TransactWriteItems => "transactWriteItems",
            Operation::ExecuteStatement => "executeStatement",
            Operation::ExecuteTransaction => "executeTransaction",
            Operation::BatchExecuteStatement => "batchExecuteStatement",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Not supported Operation variant: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Operation;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(Operation::PutItem, "putItem")]
    #[case(Operation::Scan, "scan")]
    #[case(Operation::BatchWriteItem, "batchWriteItem")]
    #[case(Operation::TransactGetItems, "transactGetItems")]
    fn operation_is_displayed_with_its_api_name(#[case] operation: Operation, #[case] name: &str) {
        assert_eq!(name, operation.to_string());
    }

    #[test]
    fn serde_and_display_agree_on_names() {
        for operation in Operation::ALL {
            let serialized = serde_json::to_value(operation).unwrap();
            assert_eq!(serialized, serde_json::json!(operation.as_str()));
        }
    }

    #[test]
    fn parse_operation_case_insensitive() {
        assert_eq!(Operation::Query, Operation::from_str("QUERY").unwrap());
        assert_eq!(
            Operation::BatchGetItem,
            Operation::from_str("batchgetitem").unwrap()
        );
        assert!(Operation::from_str("createTable").is_err());
    }
}
