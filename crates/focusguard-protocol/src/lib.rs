//! Focusguard protocol definitions for CLI-daemon communication
//!
//! Frames are a little-endian `u32` length followed by a bincode payload.

mod frame;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use frame::{read_frame, write_frame, FrameError, MAX_FRAME_BYTES};

pub use focusguard_core::{Mode, ModeStatus};

const SOCKET_NAME: &str = "focusguard.sock";

/// Requests sent from CLI to daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Check that the daemon is alive
    Ping,
    /// Current mode with remaining and elapsed time
    GetStatus,
    /// Enter FOCUS (None = configured default duration)
    StartFocus { duration_minutes: Option<u32> },
    /// Leave FOCUS early
    StopFocus,
    /// Add an entry to the persisted user block list
    BlockSite { entry: String },
    ListBlockedSites,
    ListBrowsers,
}

/// Responses sent from daemon to CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    Status(ModeStatus),
    /// FOCUS request refused by policy (bounds, cutoff, already focused)
    FocusRejected { reason: String },
    BlockedSites(Vec<String>),
    Browsers(Vec<String>),
    Ok,
    Error { message: String },
    Pong,
}

/// Socket location shared by daemon and CLI.
///
/// Prefers the per-user runtime directory and falls back to a uid-tagged
/// name in the temp directory where none exists (macOS).
pub fn socket_path() -> PathBuf {
    match dirs::runtime_dir() {
        Some(directory) => directory.join(SOCKET_NAME),
        None => std::env::temp_dir().join(fallback_socket_name()),
    }
}

#[cfg(unix)]
fn fallback_socket_name() -> String {
    let uid = unsafe { libc::getuid() };
    format!("focusguard-{uid}.sock")
}

#[cfg(not(unix))]
fn fallback_socket_name() -> String {
    SOCKET_NAME.to_string()
}
