use std::collections::HashMap;
use std::sync::Arc;

use focusguard_core::{Browser, BrowsersConfig, ScriptRunner};

use super::{SafariBrowser, ScriptedBrowser};

/// Maps foreground application names to browser adapters.
#[derive(Default, Clone)]
pub struct BrowserRegistry {
    browsers: HashMap<String, Arc<dyn Browser>>,
}

impl BrowserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BrowsersConfig, runner: Arc<dyn ScriptRunner>) -> Self {
        let mut registry = Self::new();
        for name in &config.chromium {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            registry.register(Arc::new(ScriptedBrowser::chromium(name, runner.clone())));
        }
        if config.safari {
            registry.register(Arc::new(SafariBrowser::new(runner)));
        }
        registry
    }

    /// Registers under the adapter's own name, replacing any previous entry.
    pub fn register(&mut self, browser: Arc<dyn Browser>) {
        self.browsers.insert(browser.name().to_string(), browser);
    }

    pub fn resolve(&self, app_name: &str) -> Option<Arc<dyn Browser>> {
        self.browsers.get(app_name).cloned()
    }

    pub fn is_supported(&self, app_name: &str) -> bool {
        self.browsers.contains_key(app_name)
    }

    pub fn supported_browsers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.browsers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}
