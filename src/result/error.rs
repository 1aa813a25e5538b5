//! Extraction and hook errors only ever end up in the logs. A DynamoDB call
//! fails with the wrapped client's own error or not at all.

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("consumed capacity record without table name")]
    MissingTableName,
    #[error("consumed capacity record for table {0} without capacity units")]
    MissingCapacityUnits(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CapacityHookError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

impl From<anyhow::Error> for CapacityHookError {
    fn from(error: anyhow::Error) -> Self {
        CapacityHookError::Unknown(error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientSetupError {
    #[error(transparent)]
    Config(#[from] common::config::ConfigError),
    #[error("Unable to parse AWS region: {0}")]
    Region(#[from] rusoto_core::region::ParseRegionError),
}
