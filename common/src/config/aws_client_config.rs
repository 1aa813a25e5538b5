use rusoto_core::region::{ParseRegionError, Region};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Clone, Debug)]
pub struct AwsClientConfig {
    /// Current AWS region.
    pub aws_region: String,

    /// Only used for development. LocalStack endpoint
    #[serde(default = "default_localstack_test_mode_endpoint")]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn region(&self) -> Result<Region, ParseRegionError> {
        match self.localstack_test_mode_endpoint.clone() {
            Some(endpoint) => Ok(Region::Custom {
                name: self.aws_region.clone(),
                endpoint,
            }),
            None => Region::from_str(&self.aws_region),
        }
    }
}

fn default_localstack_test_mode_endpoint() -> Option<String> {
    None
}
