use std::sync::Mutex;

use async_trait::async_trait;
use focusguard_core::Browser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCall {
    CloseActiveTab,
    OpenNewTab,
    QuitApp,
}

pub struct StubBrowser {
    name: String,
    tab: Mutex<(String, String)>,
    calls: Mutex<Vec<BrowserCall>>,
}

impl StubBrowser {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tab: Mutex::new((String::new(), String::new())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_tab(name: &str, url: &str, title: &str) -> Self {
        let browser = Self::new(name);
        browser.show(url, title);
        browser
    }

    pub fn show(&self, url: &str, title: &str) {
        *self.tab.lock().unwrap() = (url.to_string(), title.to_string());
    }

    pub fn calls(&self) -> Vec<BrowserCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BrowserCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Browser for StubBrowser {
    fn name(&self) -> &str {
        &self.name
    }

    async fn active_tab_url(&self) -> String {
        self.tab.lock().unwrap().0.clone()
    }

    async fn active_tab_title(&self) -> String {
        self.tab.lock().unwrap().1.clone()
    }

    async fn close_active_tab(&self) {
        self.record(BrowserCall::CloseActiveTab);
    }

    async fn open_new_tab(&self) {
        self.record(BrowserCall::OpenNewTab);
    }

    async fn quit_app(&self) {
        self.record(BrowserCall::QuitApp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_actions_in_order() {
        let browser = StubBrowser::with_tab("Google Chrome", "https://a.example/", "A");

        browser.close_active_tab().await;
        browser.open_new_tab().await;

        assert_eq!(browser.active_tab_url().await, "https://a.example/");
        assert_eq!(
            browser.calls(),
            vec![BrowserCall::CloseActiveTab, BrowserCall::OpenNewTab]
        );
    }
}
