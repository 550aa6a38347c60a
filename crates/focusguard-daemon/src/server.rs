use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use focusguard_core::{ModeManager, RuleSet};
use focusguard_protocol::{read_frame, write_frame, Request, Response};
use interprocess::local_socket::{
    tokio::{prelude::*, Stream},
    GenericFilePath, ListenerOptions,
};
use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument, warn};

/// What request handlers can reach inside the daemon.
#[derive(Clone)]
pub struct DaemonContext {
    pub modes: Arc<ModeManager>,
    pub rules: Arc<RuleSet>,
    pub browsers: Vec<String>,
    pub default_focus_minutes: u32,
}

pub struct Server {
    socket_path: PathBuf,
    context: DaemonContext,
}

impl Server {
    pub fn new(socket_path: PathBuf, context: DaemonContext) -> Self {
        Self {
            socket_path,
            context,
        }
    }

    fn cleanup_stale_socket(&self) -> Result<()> {
        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path)
                .context("failed to remove stale socket")?;
            debug!("removed stale socket file");
        }
        Ok(())
    }

    #[instrument(skip(self, shutdown))]
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        self.cleanup_stale_socket()?;

        let listener = ListenerOptions::new()
            .name(self.socket_path.as_os_str().to_fs_name::<GenericFilePath>()?)
            .create_tokio()
            .context("failed to bind control socket")?;

        info!(path = %self.socket_path.display(), "server listening");

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok(stream) => {
                            let context = self.context.clone();
                            tokio::spawn(async move {
                                if let Err(error) = handle_connection(stream, context).await {
                                    error!(%error, "connection handler failed");
                                }
                            });
                        }
                        Err(error) => {
                            error!(%error, "failed to accept connection");
                        }
                    }
                }
                _ = shutdown.recv() => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }

        self.cleanup_socket();
        Ok(())
    }

    fn cleanup_socket(&self) {
        if let Err(error) = std::fs::remove_file(&self.socket_path) {
            debug!(%error, "socket file already removed");
        } else {
            debug!("socket file cleaned up");
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.cleanup_socket();
    }
}

async fn handle_connection(mut stream: Stream, context: DaemonContext) -> Result<()> {
    let request: Request = read_frame(&mut stream)
        .await
        .context("failed to read request")?;
    debug!(?request, "received request");

    let response = handle_request(request, &context);
    debug!(?response, "sending response");

    write_frame(&mut stream, &response)
        .await
        .context("failed to write response")?;
    Ok(())
}

fn handle_request(request: Request, context: &DaemonContext) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::GetStatus => Response::Status(context.modes.status()),

        Request::StartFocus { duration_minutes } => {
            let duration = duration_minutes.unwrap_or(context.default_focus_minutes);
            match context.modes.try_switch_to_focus_mode(duration) {
                Ok(_) => Response::Status(context.modes.status()),
                Err(rejection) => {
                    warn!(%rejection, duration, "focus request rejected");
                    Response::FocusRejected {
                        reason: rejection.to_string(),
                    }
                }
            }
        }

        Request::StopFocus => {
            context.modes.switch_to_normal_mode();
            Response::Status(context.modes.status())
        }

        Request::BlockSite { entry } => {
            if context.rules.user_blocked().block(&entry) {
                info!(entry = %entry.trim(), "site added to block list");
                Response::Ok
            } else {
                Response::Error {
                    message: "block list entry must be a single non-empty line".to_string(),
                }
            }
        }

        Request::ListBlockedSites => Response::BlockedSites(context.rules.user_blocked().entries()),

        Request::ListBrowsers => Response::Browsers(context.browsers.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use focusguard_core::{FocusPolicy, ManualClock, Mode, UserBlockList};

    fn context_at(hour: u32) -> DaemonContext {
        let clock = Arc::new(ManualClock::at(
            Local.with_ymd_and_hms(2024, 5, 6, hour, 0, 0).unwrap(),
        ));
        DaemonContext {
            modes: Arc::new(ModeManager::new(FocusPolicy::default(), clock)),
            rules: Arc::new(RuleSet::new().with_user_blocked(UserBlockList::in_memory(["b.example"]))),
            browsers: vec!["Google Chrome".to_string(), "Safari".to_string()],
            default_focus_minutes: 60,
        }
    }

    #[test]
    fn ping_answers_pong() {
        assert_eq!(handle_request(Request::Ping, &context_at(9)), Response::Pong);
    }

    #[test]
    fn start_focus_uses_default_duration() {
        let context = context_at(9);

        let response = handle_request(
            Request::StartFocus {
                duration_minutes: None,
            },
            &context,
        );

        match response {
            Response::Status(status) => {
                assert_eq!(status.mode, Mode::Focus);
                assert_eq!(status.focus_duration_minutes, 60);
            }
            other => panic!("expected status, got {other:?}"),
        }
    }

    #[test]
    fn start_focus_after_cutoff_is_rejected() {
        let context = context_at(18);

        let response = handle_request(
            Request::StartFocus {
                duration_minutes: Some(30),
            },
            &context,
        );

        assert!(matches!(response, Response::FocusRejected { .. }));
        assert_eq!(context.modes.current_mode(), Mode::Normal);
    }

    #[test]
    fn start_focus_out_of_bounds_reports_reason() {
        let response = handle_request(
            Request::StartFocus {
                duration_minutes: Some(5),
            },
            &context_at(9),
        );

        match response {
            Response::FocusRejected { reason } => assert!(reason.contains("between 15 and 480")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn stop_focus_returns_to_normal() {
        let context = context_at(9);
        assert!(context.modes.switch_to_focus_mode(30));

        let response = handle_request(Request::StopFocus, &context);

        assert!(matches!(response, Response::Status(status) if status.mode == Mode::Normal));
    }

    #[test]
    fn block_site_adds_entry_and_rejects_blank() {
        let context = context_at(9);

        let added = handle_request(
            Request::BlockSite {
                entry: "a.example".to_string(),
            },
            &context,
        );
        let blank = handle_request(
            Request::BlockSite {
                entry: "   ".to_string(),
            },
            &context,
        );

        let multi_line = handle_request(
            Request::BlockSite {
                entry: "c.example\nd.example".to_string(),
            },
            &context,
        );

        assert_eq!(added, Response::Ok);
        assert!(matches!(blank, Response::Error { .. }));
        assert!(matches!(multi_line, Response::Error { .. }));
        assert_eq!(
            handle_request(Request::ListBlockedSites, &context),
            Response::BlockedSites(vec!["a.example".to_string(), "b.example".to_string()])
        );
    }

    #[test]
    fn list_browsers_reports_registry_names() {
        assert_eq!(
            handle_request(Request::ListBrowsers, &context_at(9)),
            Response::Browsers(vec!["Google Chrome".to_string(), "Safari".to_string()])
        );
    }
}
