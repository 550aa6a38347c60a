use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use focusguard_core::ScriptRunner;

pub const DEFAULT_SCRIPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs each script in a fresh child process: `<program> <flag> <script>`.
///
/// A child that outlives the timeout is killed and the call yields an empty
/// string, the same as a spawn failure or a non-zero exit.
pub struct ProcessScriptRunner {
    program: String,
    script_flag: String,
    timeout: Duration,
}

impl ProcessScriptRunner {
    pub fn new(program: impl Into<String>, script_flag: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            script_flag: script_flag.into(),
            timeout,
        }
    }

    pub fn osascript(timeout: Duration) -> Self {
        Self::new("osascript", "-e", timeout)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ProcessScriptRunner {
    fn default() -> Self {
        Self::osascript(DEFAULT_SCRIPT_TIMEOUT)
    }
}

#[async_trait]
impl ScriptRunner for ProcessScriptRunner {
    async fn run(&self, script: &str) -> String {
        let child = Command::new(&self.program)
            .arg(&self.script_flag)
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(error) => {
                debug!(%error, program = %self.program, "failed to spawn automation process");
                return String::new();
            }
        };

        match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                trace!(script, stdout = %stdout, "automation script succeeded");
                stdout
            }
            Ok(Ok(output)) => {
                debug!(
                    status = ?output.status,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "automation script failed"
                );
                String::new()
            }
            Ok(Err(error)) => {
                debug!(%error, "failed to collect automation output");
                String::new()
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "automation script timed out, process killed");
                String::new()
            }
        }
    }
}
