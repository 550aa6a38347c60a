use async_trait::async_trait;

/// Synchronous-per-call boundary to the OS scripting facility.
///
/// Returns trimmed standard output, or an empty string on spawn failure,
/// non-zero exit or timeout.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, script: &str) -> String;
}
