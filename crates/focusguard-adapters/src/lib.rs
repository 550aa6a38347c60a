//! Focusguard adapters - OS automation and storage behind the core ports.
//!
//! Browser control goes through a [`focusguard_core::ScriptRunner`], so every
//! adapter here can be exercised with the doubles in [`testing`].

pub mod automation;
pub mod browser;
pub mod file;
pub mod testing;

pub use automation::{FrontmostAppDetector, ProcessScriptRunner, DEFAULT_SCRIPT_TIMEOUT};
pub use browser::{BrowserRegistry, SafariBrowser, ScriptGrammar, ScriptedBrowser, CHROMIUM_GRAMMAR};
pub use file::TextFileBlockList;
pub use testing::{BrowserCall, StubBrowser, StubForegroundApp, StubScriptRunner};
