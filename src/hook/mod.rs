use async_trait::async_trait;
use model::capacity::CapacityEvent;

use crate::result::error::CapacityHookError;

/// Receives the consumed capacity of every instrumented call, one event per
/// table. Failures are logged by the caller of the hook and dropped.
#[async_trait]
pub trait CapacityHook
where
    Self: Sync + Send,
{
    async fn record(&self, event: &CapacityEvent) -> Result<(), CapacityHookError>;
}

/// The hook used when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHook;

impl LogHook {
    pub fn format(event: &CapacityEvent) -> String {
        format!(
            "[{}] [CU: {}] [Keys: {}]",
            event.operation,
            event.capacity_units,
            event.hash_key_values.join(", ")
        )
    }
}

#[async_trait]
impl CapacityHook for LogHook {
    async fn record(&self, event: &CapacityEvent) -> Result<(), CapacityHookError> {
        tracing::info!(
            operation = %event.operation,
            table_name = %event.table_name,
            capacity_units = event.capacity_units,
            "{}",
            LogHook::format(event)
        );
        Ok(())
    }
}

/// Adapts a synchronous closure into a hook.
pub struct FnHook<F>(F);

impl<F> FnHook<F>
where
    F: Fn(&CapacityEvent) -> Result<(), CapacityHookError> + Sync + Send,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> CapacityHook for FnHook<F>
where
    F: Fn(&CapacityEvent) -> Result<(), CapacityHookError> + Sync + Send,
{
    async fn record(&self, event: &CapacityEvent) -> Result<(), CapacityHookError> {
        (self.0)(event)
    }
}
