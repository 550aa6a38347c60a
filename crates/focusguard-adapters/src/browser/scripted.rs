use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use focusguard_core::{Browser, ScriptRunner};

use super::quote;

/// The verbs a browser's scripting dictionary uses for the five operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptGrammar {
    pub active_tab_url: &'static str,
    pub active_tab_title: &'static str,
    pub close_active_tab: &'static str,
    pub open_new_tab: &'static str,
}

/// Shared by Chrome, Edge and the other Chromium derivatives.
pub const CHROMIUM_GRAMMAR: ScriptGrammar = ScriptGrammar {
    active_tab_url: "get URL of active tab of front window",
    active_tab_title: "get title of active tab of front window",
    close_active_tab: "close active tab of front window",
    open_new_tab: "make new tab at end of tabs of front window",
};

/// A browser driven entirely by `tell application "<name>" to <verb>` scripts.
pub struct ScriptedBrowser {
    name: String,
    grammar: ScriptGrammar,
    runner: Arc<dyn ScriptRunner>,
}

impl ScriptedBrowser {
    pub fn new(name: impl Into<String>, grammar: ScriptGrammar, runner: Arc<dyn ScriptRunner>) -> Self {
        Self {
            name: name.into(),
            grammar,
            runner,
        }
    }

    pub fn chromium(name: impl Into<String>, runner: Arc<dyn ScriptRunner>) -> Self {
        Self::new(name, CHROMIUM_GRAMMAR, runner)
    }

    fn script(&self, verb: &str) -> String {
        format!("tell application {} to {verb}", quote(&self.name))
    }

    async fn tell(&self, verb: &str) -> String {
        self.runner.run(&self.script(verb)).await
    }
}

#[async_trait]
impl Browser for ScriptedBrowser {
    fn name(&self) -> &str {
        &self.name
    }

    async fn active_tab_url(&self) -> String {
        self.tell(self.grammar.active_tab_url).await
    }

    async fn active_tab_title(&self) -> String {
        self.tell(self.grammar.active_tab_title).await
    }

    async fn close_active_tab(&self) {
        debug!(browser = %self.name, "closing active tab");
        self.tell(self.grammar.close_active_tab).await;
    }

    async fn open_new_tab(&self) {
        debug!(browser = %self.name, "opening blank tab");
        self.tell(self.grammar.open_new_tab).await;
    }

    async fn quit_app(&self) {
        debug!(browser = %self.name, "quitting browser");
        self.tell("quit").await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubScriptRunner;

    fn chrome(runner: &Arc<StubScriptRunner>) -> ScriptedBrowser {
        ScriptedBrowser::chromium("Google Chrome", runner.clone())
    }

    #[tokio::test]
    async fn reads_url_and_title_of_active_tab() {
        let runner = Arc::new(StubScriptRunner::new());
        runner.respond_to("get URL", "https://example.com/");
        runner.respond_to("get title", "Example Domain");
        let browser = chrome(&runner);

        assert_eq!(browser.active_tab_url().await, "https://example.com/");
        assert_eq!(browser.active_tab_title().await, "Example Domain");
        assert_eq!(
            runner.scripts(),
            vec![
                "tell application \"Google Chrome\" to get URL of active tab of front window",
                "tell application \"Google Chrome\" to get title of active tab of front window",
            ]
        );
    }

    #[tokio::test]
    async fn failed_read_is_empty_string() {
        let runner = Arc::new(StubScriptRunner::new());
        let browser = chrome(&runner);

        assert_eq!(browser.active_tab_url().await, "");
    }

    #[tokio::test]
    async fn actions_target_the_named_application() {
        let runner = Arc::new(StubScriptRunner::new());
        let browser = ScriptedBrowser::chromium("Microsoft Edge", runner.clone());

        browser.close_active_tab().await;
        browser.open_new_tab().await;
        browser.quit_app().await;

        assert_eq!(
            runner.scripts(),
            vec![
                "tell application \"Microsoft Edge\" to close active tab of front window",
                "tell application \"Microsoft Edge\" to make new tab at end of tabs of front window",
                "tell application \"Microsoft Edge\" to quit",
            ]
        );
    }
}
