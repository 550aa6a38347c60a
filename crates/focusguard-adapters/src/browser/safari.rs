use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use focusguard_core::{Browser, ScriptRunner};

pub const SAFARI: &str = "Safari";

const URL_SCRIPT: &str = "tell application \"Safari\" to get URL of current tab of front window";
const TITLE_SCRIPT: &str = "tell application \"Safari\" to get name of current tab of front window";
const CLOSE_TAB_SCRIPT: &str = "tell application \"Safari\" to close current tab of front window";
const NEW_TAB_SCRIPT: &str =
    "tell application \"Safari\" to tell front window to set current tab to (make new tab)";
const QUIT_SCRIPT: &str = "tell application \"Safari\" to quit";

/// Safari names the focused tab `current tab` and its title `name`.
pub struct SafariBrowser {
    runner: Arc<dyn ScriptRunner>,
}

impl SafariBrowser {
    pub fn new(runner: Arc<dyn ScriptRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Browser for SafariBrowser {
    fn name(&self) -> &str {
        SAFARI
    }

    async fn active_tab_url(&self) -> String {
        self.runner.run(URL_SCRIPT).await
    }

    async fn active_tab_title(&self) -> String {
        self.runner.run(TITLE_SCRIPT).await
    }

    async fn close_active_tab(&self) {
        debug!(browser = SAFARI, "closing active tab");
        self.runner.run(CLOSE_TAB_SCRIPT).await;
    }

    async fn open_new_tab(&self) {
        debug!(browser = SAFARI, "opening blank tab");
        self.runner.run(NEW_TAB_SCRIPT).await;
    }

    async fn quit_app(&self) {
        debug!(browser = SAFARI, "quitting browser");
        self.runner.run(QUIT_SCRIPT).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubScriptRunner;

    #[tokio::test]
    async fn uses_safari_dictionary_terms() {
        let runner = Arc::new(StubScriptRunner::new());
        runner.respond_to("name of current tab", "Start Page");
        let browser = SafariBrowser::new(runner.clone());

        assert_eq!(browser.active_tab_title().await, "Start Page");
        browser.open_new_tab().await;

        let scripts = runner.scripts();
        assert_eq!(scripts[0], TITLE_SCRIPT);
        assert!(scripts[1].contains("set current tab to (make new tab)"));
    }

    #[test]
    fn reports_its_application_name() {
        let browser = SafariBrowser::new(Arc::new(StubScriptRunner::new()));

        assert_eq!(browser.name(), "Safari");
    }
}
