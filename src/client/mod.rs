mod dynamodb;

use common::aws_clients::dynamodb::get_dynamodb_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use model::operation::Operation;
use model::table_keys::TableKeyConfig;
use rusoto_core::RusotoError;
use rusoto_dynamodb::{
    BatchExecuteStatementInput, BatchGetItemInput, BatchWriteItemInput, DeleteItemInput,
    DynamoDb, DynamoDbClient, ExecuteStatementInput, ExecuteTransactionInput, GetItemInput,
    PutItemInput, QueryInput, ScanInput, TransactGetItemsInput, TransactWriteItemsInput,
    UpdateItemInput,
};
use std::future::Future;
use std::sync::Arc;

use crate::config::CapacityHookConfig;
use crate::defaults::{ApplyRequestDefaults, RequestDefaults, ReturnValuesPolicy};
use crate::emitter::{CapacityEmitter, CapacityResponse};
use crate::hook::{CapacityHook, LogHook};
use crate::normalizer::IndexRequestItems;
use crate::result::error::ClientSetupError;

/// A request type the instrumented client knows how to observe.
pub trait OperationRequest: ApplyRequestDefaults + IndexRequestItems + Send {
    const OPERATION: Operation;
}

macro_rules! operation_requests {
    ($($input: ty => $operation: expr),* $(,)?) => {
        $(
        impl OperationRequest for $input {
            const OPERATION: Operation = $operation;
        }
        )*
    };
}

operation_requests!(
    GetItemInput => Operation::GetItem,
    PutItemInput => Operation::PutItem,
    UpdateItemInput => Operation::UpdateItem,
    DeleteItemInput => Operation::DeleteItem,
    BatchGetItemInput => Operation::BatchGetItem,
    BatchWriteItemInput => Operation::BatchWriteItem,
    QueryInput => Operation::Query,
    ScanInput => Operation::Scan,
    TransactGetItemsInput => Operation::TransactGetItems,
    TransactWriteItemsInput => Operation::TransactWriteItems,
    ExecuteStatementInput => Operation::ExecuteStatement,
    ExecuteTransactionInput => Operation::ExecuteTransaction,
    BatchExecuteStatementInput => Operation::BatchExecuteStatement,
);

/// DynamoDB client that reports consumed capacity of every data plane call to
/// a [`CapacityHook`]. Responses and errors are the wrapped client's own.
///
/// ```no_run
/// use ddb_capacity_hook::client::InstrumentedDynamoDb;
/// use ddb_capacity_hook::model::table_keys::TableKeyConfig;
/// use rusoto_core::Region;
/// use rusoto_dynamodb::DynamoDbClient;
///
/// let keys = TableKeyConfig::new().with_hash_key("orders", "order_id");
/// let client = InstrumentedDynamoDb::new(DynamoDbClient::new(Region::UsWest2), keys);
/// ```
#[derive(Clone)]
pub struct InstrumentedDynamoDb<C: DynamoDb + Sync + Send> {
    inner: C,
    emitter: CapacityEmitter,
    defaults: RequestDefaults,
}

impl<C: DynamoDb + Sync + Send> InstrumentedDynamoDb<C> {
    /// Wraps `inner`, logging capacity events with [`LogHook`].
    pub fn new(inner: C, keys: TableKeyConfig) -> Self {
        Self {
            inner,
            emitter: CapacityEmitter::new(Arc::new(LogHook), Arc::new(keys)),
            defaults: RequestDefaults::default(),
        }
    }

    pub fn from_config(inner: C, config: &CapacityHookConfig) -> Self {
        Self {
            defaults: config.request_defaults(),
            ..Self::new(inner, config.capacity_table_keys.clone())
        }
    }

    pub fn with_hook<H: CapacityHook + 'static>(self, hook: H) -> Self {
        self.with_shared_hook(Arc::new(hook))
    }

    /// Same as [`Self::with_hook`] for a hook shared with other clients.
    pub fn with_shared_hook(self, hook: Arc<dyn CapacityHook>) -> Self {
        Self {
            emitter: self.emitter.with_hook(hook),
            ..self
        }
    }

    pub fn with_return_values(self, return_values: ReturnValuesPolicy) -> Self {
        Self {
            defaults: RequestDefaults::new(return_values),
            ..self
        }
    }

    pub fn table_keys(&self) -> &TableKeyConfig {
        self.emitter.keys()
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Applies the request defaults, indexes the request, forwards it through
    /// `call` and, on success, emits the capacity events of the response.
    async fn instrumented<I, O, E, F, Fut>(&self, input: I, call: F) -> Result<O, RusotoError<E>>
    where
        I: OperationRequest,
        O: CapacityResponse,
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<O, RusotoError<E>>>,
    {
        let input = input.with_defaults(&self.defaults);
        let index = input.request_item_index();

        let response = call(input).await?;

        self.emitter.emit(I::OPERATION, &response, index.as_ref());
        Ok(response)
    }
}

impl InstrumentedDynamoDb<DynamoDbClient> {
    /// Builds a `DynamoDbClient` from the AWS environment configuration and
    /// instruments it with the capacity configuration found in the environment.
    pub async fn from_env() -> Result<Self, ClientSetupError> {
        let aws_config = ConfigLoader::load_default::<AwsClientConfig>().await?;
        let capacity_config = ConfigLoader::load_default::<CapacityHookConfig>().await?;

        let client = get_dynamodb_client(&aws_config)?;
        tracing::info!(
            region = ?aws_config.aws_region,
            echo_written_items = capacity_config.capacity_echo_written_items,
            "Instrumented DynamoDB client created"
        );

        Ok(Self::from_config(client, &capacity_config))
    }
}
