//! Request defaults merged in before a call is forwarded.
//!
//! Every transform takes the request by value and hands back a new one, the
//! caller's own value is never touched.

use rusoto_dynamodb::{
    BatchExecuteStatementInput, BatchGetItemInput, BatchWriteItemInput, DeleteItemInput,
    ExecuteStatementInput, ExecuteTransactionInput, GetItemInput, PutItemInput, QueryInput,
    ScanInput, TransactGetItemsInput, TransactWriteItemsInput, UpdateItemInput,
};

pub const RETURN_CONSUMED_CAPACITY_TOTAL: &str = "TOTAL";
pub const RETURN_VALUES_ALL_OLD: &str = "ALL_OLD";
pub const RETURN_VALUES_ALL_NEW: &str = "ALL_NEW";

/// What to do with an unset `ReturnValues` on single item writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnValuesPolicy {
    /// Forward `ReturnValues` exactly as given.
    #[default]
    Preserve,
    /// `ALL_OLD` for put and delete, `ALL_NEW` for update.
    EchoItems,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestDefaults {
    pub return_values: ReturnValuesPolicy,
}

impl RequestDefaults {
    pub fn new(return_values: ReturnValuesPolicy) -> Self {
        Self { return_values }
    }

    fn echo_items(&self) -> bool {
        self.return_values == ReturnValuesPolicy::EchoItems
    }
}

pub trait ApplyRequestDefaults: Sized {
    fn with_defaults(self, _defaults: &RequestDefaults) -> Self {
        self
    }
}

fn total_if_unset(value: Option<String>) -> Option<String> {
    value.or_else(|| Some(RETURN_CONSUMED_CAPACITY_TOTAL.to_owned()))
}

fn return_values_if_unset(
    value: Option<String>,
    defaults: &RequestDefaults,
    echoed: &str,
) -> Option<String> {
    match value {
        None if defaults.echo_items() => Some(echoed.to_owned()),
        other => other,
    }
}

macro_rules! consumed_capacity_defaults {
    ($($input: ty),* $(,)?) => {
        $(
        impl ApplyRequestDefaults for $input {
            fn with_defaults(self, _defaults: &RequestDefaults) -> Self {
                Self {
                    return_consumed_capacity: total_if_unset(self.return_consumed_capacity),
                    ..self
                }
            }
        }
        )*
    };
}

consumed_capacity_defaults!(
    GetItemInput,
    BatchGetItemInput,
    BatchWriteItemInput,
    QueryInput,
    ScanInput,
    TransactGetItemsInput,
    TransactWriteItemsInput,
);

impl ApplyRequestDefaults for PutItemInput {
    fn with_defaults(self, defaults: &RequestDefaults) -> Self {
        Self {
            return_consumed_capacity: total_if_unset(self.return_consumed_capacity),
            return_values: return_values_if_unset(
                self.return_values,
                defaults,
                RETURN_VALUES_ALL_OLD,
            ),
            ..self
        }
    }
}

impl ApplyRequestDefaults for UpdateItemInput {
    fn with_defaults(self, defaults: &RequestDefaults) -> Self {
        Self {
            return_consumed_capacity: total_if_unset(self.return_consumed_capacity),
            return_values: return_values_if_unset(
                self.return_values,
                defaults,
                RETURN_VALUES_ALL_NEW,
            ),
            ..self
        }
    }
}

impl ApplyRequestDefaults for DeleteItemInput {
    fn with_defaults(self, defaults: &RequestDefaults) -> Self {
        Self {
            return_consumed_capacity: total_if_unset(self.return_consumed_capacity),
            return_values: return_values_if_unset(
                self.return_values,
                defaults,
                RETURN_VALUES_ALL_OLD,
            ),
            ..self
        }
    }
}

// rusoto's PartiQL shapes carry no ReturnConsumedCapacity field.
impl ApplyRequestDefaults for ExecuteStatementInput {}

impl ApplyRequestDefaults for ExecuteTransactionInput {}

impl ApplyRequestDefaults for BatchExecuteStatementInput {}
