//! Action connector port.

use async_trait::async_trait;

use crate::domain::models::ActionConfig;

/// Translates one output interface value into a middleware message.
///
/// `connect` never fails: unknown actions are logged and dropped.
#[async_trait]
pub trait ActionConnector<I>: Send + Sync
where
    I: Send + 'static,
{
    /// Connector name used in log records.
    fn name(&self) -> &'static str;

    /// Configuration the connector was built with.
    fn config(&self) -> &ActionConfig;

    /// Translate `input` and hand the result to the sink.
    async fn connect(&self, input: I);
}
