use async_trait::async_trait;

#[async_trait]
pub trait ForegroundApp: Send + Sync {
    /// Display name of the frontmost application, `None` when unknown.
    async fn active_application(&self) -> Option<String>;
}
