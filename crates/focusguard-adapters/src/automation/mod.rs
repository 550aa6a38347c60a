mod foreground;
mod process_runner;

pub use foreground::FrontmostAppDetector;
pub use process_runner::{ProcessScriptRunner, DEFAULT_SCRIPT_TIMEOUT};
