use std::sync::Mutex;

use async_trait::async_trait;
use focusguard_core::ScriptRunner;

/// Answers scripts containing a registered fragment and records every call.
#[derive(Default)]
pub struct StubScriptRunner {
    responses: Mutex<Vec<(String, String)>>,
    scripts: Mutex<Vec<String>>,
}

impl StubScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_to(&self, fragment: &str, output: &str) {
        self.responses
            .lock()
            .unwrap()
            .push((fragment.to_string(), output.to_string()));
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunner for StubScriptRunner {
    async fn run(&self, script: &str) -> String {
        self.scripts.lock().unwrap().push(script.to_string());
        self.responses
            .lock()
            .unwrap()
            .iter()
            .find(|(fragment, _)| script.contains(fragment.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_default()
    }
}
