use std::sync::Arc;

use async_trait::async_trait;

use focusguard_core::{ForegroundApp, ScriptRunner};

const FRONTMOST_APP_SCRIPT: &str =
    "tell application \"System Events\" to name of first application process whose frontmost is true";

/// Asks System Events for the frontmost application process.
pub struct FrontmostAppDetector {
    runner: Arc<dyn ScriptRunner>,
}

impl FrontmostAppDetector {
    pub fn new(runner: Arc<dyn ScriptRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ForegroundApp for FrontmostAppDetector {
    async fn active_application(&self) -> Option<String> {
        let name = self.runner.run(FRONTMOST_APP_SCRIPT).await;
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubScriptRunner;

    #[tokio::test]
    async fn returns_frontmost_application_name() {
        let runner = Arc::new(StubScriptRunner::new());
        runner.respond_to("frontmost is true", "Safari");
        let detector = FrontmostAppDetector::new(runner.clone());

        assert_eq!(detector.active_application().await, Some("Safari".to_string()));
        assert_eq!(runner.scripts(), vec![FRONTMOST_APP_SCRIPT.to_string()]);
    }

    #[tokio::test]
    async fn empty_output_means_unknown_application() {
        let detector = FrontmostAppDetector::new(Arc::new(StubScriptRunner::new()));

        assert_eq!(detector.active_application().await, None);
    }
}
