//! In-memory doubles for the automation ports.

mod stub_browser;
mod stub_foreground;
mod stub_script_runner;

pub use stub_browser::{BrowserCall, StubBrowser};
pub use stub_foreground::StubForegroundApp;
pub use stub_script_runner::StubScriptRunner;
