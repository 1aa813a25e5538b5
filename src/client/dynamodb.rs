use async_trait::async_trait;
use rusoto_core::RusotoError;
use rusoto_dynamodb::*;

use super::InstrumentedDynamoDb;

/// Data plane operations go through the capacity instrumentation, everything
/// else is forwarded as is.
#[async_trait]
impl<C: DynamoDb + Sync + Send> DynamoDb for InstrumentedDynamoDb<C> {
    async fn batch_execute_statement(
        &self,
        input: BatchExecuteStatementInput,
    ) -> Result<BatchExecuteStatementOutput, RusotoError<BatchExecuteStatementError>> {
        self.instrumented(input, |input| self.inner.batch_execute_statement(input))
            .await
    }

    async fn batch_get_item(
        &self,
        input: BatchGetItemInput,
    ) -> Result<BatchGetItemOutput, RusotoError<BatchGetItemError>> {
        self.instrumented(input, |input| self.inner.batch_get_item(input))
            .await
    }

    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, RusotoError<BatchWriteItemError>> {
        self.instrumented(input, |input| self.inner.batch_write_item(input))
            .await
    }

    async fn create_backup(
        &self,
        input: CreateBackupInput,
    ) -> Result<CreateBackupOutput, RusotoError<CreateBackupError>> {
        self.inner.create_backup(input).await
    }

    async fn create_global_table(
        &self,
        input: CreateGlobalTableInput,
    ) -> Result<CreateGlobalTableOutput, RusotoError<CreateGlobalTableError>> {
        self.inner.create_global_table(input).await
    }

    async fn create_table(
        &self,
        input: CreateTableInput,
    ) -> Result<CreateTableOutput, RusotoError<CreateTableError>> {
        self.inner.create_table(input).await
    }

    async fn delete_backup(
        &self,
        input: DeleteBackupInput,
    ) -> Result<DeleteBackupOutput, RusotoError<DeleteBackupError>> {
        self.inner.delete_backup(input).await
    }

    async fn delete_item(
        &self,
        input: DeleteItemInput,
    ) -> Result<DeleteItemOutput, RusotoError<DeleteItemError>> {
        self.instrumented(input, |input| self.inner.delete_item(input))
            .await
    }

    async fn delete_table(
        &self,
        input: DeleteTableInput,
    ) -> Result<DeleteTableOutput, RusotoError<DeleteTableError>> {
        self.inner.delete_table(input).await
    }

    async fn describe_backup(
        &self,
        input: DescribeBackupInput,
    ) -> Result<DescribeBackupOutput, RusotoError<DescribeBackupError>> {
        self.inner.describe_backup(input).await
    }

    async fn describe_continuous_backups(
        &self,
        input: DescribeContinuousBackupsInput,
    ) -> Result<DescribeContinuousBackupsOutput, RusotoError<DescribeContinuousBackupsError>> {
        self.inner.describe_continuous_backups(input).await
    }

    async fn describe_contributor_insights(
        &self,
        input: DescribeContributorInsightsInput,
    ) -> Result<DescribeContributorInsightsOutput, RusotoError<DescribeContributorInsightsError>> {
        self.inner.describe_contributor_insights(input).await
    }

    async fn describe_endpoints(
        &self,
    ) -> Result<DescribeEndpointsResponse, RusotoError<DescribeEndpointsError>> {
        self.inner.describe_endpoints().await
    }

    async fn describe_export(
        &self,
        input: DescribeExportInput,
    ) -> Result<DescribeExportOutput, RusotoError<DescribeExportError>> {
        self.inner.describe_export(input).await
    }

    async fn describe_global_table(
        &self,
        input: DescribeGlobalTableInput,
    ) -> Result<DescribeGlobalTableOutput, RusotoError<DescribeGlobalTableError>> {
        self.inner.describe_global_table(input).await
    }

    async fn describe_global_table_settings(
        &self,
        input: DescribeGlobalTableSettingsInput,
    ) -> Result<DescribeGlobalTableSettingsOutput, RusotoError<DescribeGlobalTableSettingsError>> {
        self.inner.describe_global_table_settings(input).await
    }

    async fn describe_kinesis_streaming_destination(
        &self,
        input: DescribeKinesisStreamingDestinationInput,
    ) -> Result<
        DescribeKinesisStreamingDestinationOutput,
        RusotoError<DescribeKinesisStreamingDestinationError>,
    > {
        self.inner.describe_kinesis_streaming_destination(input).await
    }

    async fn describe_limits(
        &self,
    ) -> Result<DescribeLimitsOutput, RusotoError<DescribeLimitsError>> {
        self.inner.describe_limits().await
    }

    async fn describe_table(
        &self,
        input: DescribeTableInput,
    ) -> Result<DescribeTableOutput, RusotoError<DescribeTableError>> {
        self.inner.describe_table(input).await
    }

    async fn describe_table_replica_auto_scaling(
        &self,
        input: DescribeTableReplicaAutoScalingInput,
    ) -> Result<
        DescribeTableReplicaAutoScalingOutput,
        RusotoError<DescribeTableReplicaAutoScalingError>,
    > {
        self.inner.describe_table_replica_auto_scaling(input).await
    }

    async fn describe_time_to_live(
        &self,
        input: DescribeTimeToLiveInput,
    ) -> Result<DescribeTimeToLiveOutput, RusotoError<DescribeTimeToLiveError>> {
        self.inner.describe_time_to_live(input).await
    }

    async fn disable_kinesis_streaming_destination(
        &self,
        input: KinesisStreamingDestinationInput,
    ) -> Result<
        KinesisStreamingDestinationOutput,
        RusotoError<DisableKinesisStreamingDestinationError>,
    > {
        self.inner.disable_kinesis_streaming_destination(input).await
    }

    async fn enable_kinesis_streaming_destination(
        &self,
        input: KinesisStreamingDestinationInput,
    ) -> Result<
        KinesisStreamingDestinationOutput,
        RusotoError<EnableKinesisStreamingDestinationError>,
    > {
        self.inner.enable_kinesis_streaming_destination(input).await
    }

    async fn execute_statement(
        &self,
        input: ExecuteStatementInput,
    ) -> Result<ExecuteStatementOutput, RusotoError<ExecuteStatementError>> {
        self.instrumented(input, |input| self.inner.execute_statement(input))
            .await
    }

    async fn execute_transaction(
        &self,
        input: ExecuteTransactionInput,
    ) -> Result<ExecuteTransactionOutput, RusotoError<ExecuteTransactionError>> {
        self.instrumented(input, |input| self.inner.execute_transaction(input))
            .await
    }

    async fn export_table_to_point_in_time(
        &self,
        input: ExportTableToPointInTimeInput,
    ) -> Result<ExportTableToPointInTimeOutput, RusotoError<ExportTableToPointInTimeError>> {
        self.inner.export_table_to_point_in_time(input).await
    }

    async fn get_item(
        &self,
        input: GetItemInput,
    ) -> Result<GetItemOutput, RusotoError<GetItemError>> {
        self.instrumented(input, |input| self.inner.get_item(input))
            .await
    }

    async fn list_backups(
        &self,
        input: ListBackupsInput,
    ) -> Result<ListBackupsOutput, RusotoError<ListBackupsError>> {
        self.inner.list_backups(input).await
    }

    async fn list_contributor_insights(
        &self,
        input: ListContributorInsightsInput,
    ) -> Result<ListContributorInsightsOutput, RusotoError<ListContributorInsightsError>> {
        self.inner.list_contributor_insights(input).await
    }

    async fn list_exports(
        &self,
        input: ListExportsInput,
    ) -> Result<ListExportsOutput, RusotoError<ListExportsError>> {
        self.inner.list_exports(input).await
    }

    async fn list_global_tables(
        &self,
        input: ListGlobalTablesInput,
    ) -> Result<ListGlobalTablesOutput, RusotoError<ListGlobalTablesError>> {
        self.inner.list_global_tables(input).await
    }

    async fn list_tables(
        &self,
        input: ListTablesInput,
    ) -> Result<ListTablesOutput, RusotoError<ListTablesError>> {
        self.inner.list_tables(input).await
    }

    async fn list_tags_of_resource(
        &self,
        input: ListTagsOfResourceInput,
    ) -> Result<ListTagsOfResourceOutput, RusotoError<ListTagsOfResourceError>> {
        self.inner.list_tags_of_resource(input).await
    }

    async fn put_item(
        &self,
        input: PutItemInput,
    ) -> Result<PutItemOutput, RusotoError<PutItemError>> {
        self.instrumented(input, |input| self.inner.put_item(input))
            .await
    }

    async fn query(&self, input: QueryInput) -> Result<QueryOutput, RusotoError<QueryError>> {
        self.instrumented(input, |input| self.inner.query(input))
            .await
    }

    async fn restore_table_from_backup(
        &self,
        input: RestoreTableFromBackupInput,
    ) -> Result<RestoreTableFromBackupOutput, RusotoError<RestoreTableFromBackupError>> {
        self.inner.restore_table_from_backup(input).await
    }

    async fn restore_table_to_point_in_time(
        &self,
        input: RestoreTableToPointInTimeInput,
    ) -> Result<RestoreTableToPointInTimeOutput, RusotoError<RestoreTableToPointInTimeError>> {
        self.inner.restore_table_to_point_in_time(input).await
    }

    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, RusotoError<ScanError>> {
        self.instrumented(input, |input| self.inner.scan(input))
            .await
    }

    async fn tag_resource(
        &self,
        input: TagResourceInput,
    ) -> Result<(), RusotoError<TagResourceError>> {
        self.inner.tag_resource(input).await
    }

    async fn transact_get_items(
        &self,
        input: TransactGetItemsInput,
    ) -> Result<TransactGetItemsOutput, RusotoError<TransactGetItemsError>> {
        self.instrumented(input, |input| self.inner.transact_get_items(input))
            .await
    }

    async fn transact_write_items(
        &self,
        input: TransactWriteItemsInput,
    ) -> Result<TransactWriteItemsOutput, RusotoError<TransactWriteItemsError>> {
        self.instrumented(input, |input| self.inner.transact_write_items(input))
            .await
    }

    async fn untag_resource(
        &self,
        input: UntagResourceInput,
    ) -> Result<(), RusotoError<UntagResourceError>> {
        self.inner.untag_resource(input).await
    }

    async fn update_continuous_backups(
        &self,
        input: UpdateContinuousBackupsInput,
    ) -> Result<UpdateContinuousBackupsOutput, RusotoError<UpdateContinuousBackupsError>> {
        self.inner.update_continuous_backups(input).await
    }

    async fn update_contributor_insights(
        &self,
        input: UpdateContributorInsightsInput,
    ) -> Result<UpdateContributorInsightsOutput, RusotoError<UpdateContributorInsightsError>> {
        self.inner.update_contributor_insights(input).await
    }

    async fn update_global_table(
        &self,
        input: UpdateGlobalTableInput,
    ) -> Result<UpdateGlobalTableOutput, RusotoError<UpdateGlobalTableError>> {
        self.inner.update_global_table(input).await
    }

    async fn update_global_table_settings(
        &self,
        input: UpdateGlobalTableSettingsInput,
    ) -> Result<UpdateGlobalTableSettingsOutput, RusotoError<UpdateGlobalTableSettingsError>> {
        self.inner.update_global_table_settings(input).await
    }

    async fn update_item(
        &self,
        input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, RusotoError<UpdateItemError>> {
        self.instrumented(input, |input| self.inner.update_item(input))
            .await
    }

    async fn update_table(
        &self,
        input: UpdateTableInput,
    ) -> Result<UpdateTableOutput, RusotoError<UpdateTableError>> {
        self.inner.update_table(input).await
    }

    async fn update_table_replica_auto_scaling(
        &self,
        input: UpdateTableReplicaAutoScalingInput,
    ) -> Result<
        UpdateTableReplicaAutoScalingOutput,
        RusotoError<UpdateTableReplicaAutoScalingError>,
    > {
        self.inner.update_table_replica_auto_scaling(input).await
    }

    async fn update_time_to_live(
        &self,
        input: UpdateTimeToLiveInput,
    ) -> Result<UpdateTimeToLiveOutput, RusotoError<UpdateTimeToLiveError>> {
        self.inner.update_time_to_live(input).await
    }
}
