use std::sync::Mutex;

use async_trait::async_trait;
use focusguard_core::ForegroundApp;

#[derive(Default)]
pub struct StubForegroundApp {
    current: Mutex<Option<String>>,
}

impl StubForegroundApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn showing(app_name: &str) -> Self {
        let stub = Self::new();
        stub.switch_to(app_name);
        stub
    }

    pub fn switch_to(&self, app_name: &str) {
        *self.current.lock().unwrap() = Some(app_name.to_string());
    }

    pub fn clear(&self) {
        *self.current.lock().unwrap() = None;
    }
}

#[async_trait]
impl ForegroundApp for StubForegroundApp {
    async fn active_application(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }
}
