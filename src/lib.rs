//! Consumed capacity instrumentation for `rusoto_dynamodb` clients.
//!
//! [`InstrumentedDynamoDb`] wraps any [`rusoto_dynamodb::DynamoDb`]
//! implementation. Each get/put/update/delete, batch, query, scan and
//! transactional call is forwarded unchanged (besides requesting `TOTAL`
//! consumed capacity) and the capacity the backend reports is handed to a
//! [`hook::CapacityHook`] together with the hash key values touched, one
//! event per table.

use rusoto_dynamodb::AttributeValue;
use std::collections::HashMap;

pub mod client;
pub mod config;
pub mod defaults;
pub mod emitter;
pub mod hook;
pub mod normalizer;
pub mod result;

pub use client::InstrumentedDynamoDb;
pub use model;

/// A DynamoDB item or key in its native attribute value encoding.
pub type Item = HashMap<String, AttributeValue>;
