use crate::client::{ClientError, DaemonClient};
use anyhow::Result;
use chrono::{Local, TimeZone};
use focusguard_protocol::{Mode, ModeStatus, Request, Response};
use serde::Serialize;

#[derive(Serialize)]
struct StatusOutput {
    mode: Mode,
    remaining_seconds: i64,
    remaining_formatted: String,
    elapsed_seconds: i64,
    progress_percentage: f64,
    focus_duration_minutes: u32,
    ends_at: Option<String>,
}

impl From<&ModeStatus> for StatusOutput {
    fn from(status: &ModeStatus) -> Self {
        Self {
            mode: status.mode,
            remaining_seconds: status.remaining_ms / 1000,
            remaining_formatted: format_clock(status.remaining_ms),
            elapsed_seconds: status.elapsed_ms / 1000,
            progress_percentage: status.progress_percentage,
            focus_duration_minutes: status.focus_duration_minutes,
            ends_at: ends_at(status),
        }
    }
}

pub async fn execute(json: bool) -> Result<()> {
    let client = DaemonClient::new();

    match client.send(Request::GetStatus).await {
        Ok(Response::Status(status)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&StatusOutput::from(&status))?);
            } else {
                print!("{}", render(&status));
            }
        }
        Ok(response) => {
            if json {
                println!(r#"{{"error": "unexpected response"}}"#);
                std::process::exit(1);
            }
            super::unexpected(response)?;
        }
        Err(ClientError::DaemonNotRunning) => {
            if json {
                println!(r#"{{"error": "daemon not running"}}"#);
            } else {
                println!("⚫ Daemon not running");
            }
        }
        Err(error) => {
            if json {
                println!(r#"{{"error": "{}"}}"#, error);
                std::process::exit(1);
            }
            super::client_failure(error)?;
        }
    }

    Ok(())
}

fn render(status: &ModeStatus) -> String {
    match status.mode {
        Mode::Normal => "⚪ Normal mode\n".to_string(),
        Mode::Focus => {
            let mut output = String::from("🎯 Focus mode\n");
            output.push_str(&format!(
                "   Remaining: {} ({:.0}% done)\n",
                format_clock(status.remaining_ms),
                status.progress_percentage
            ));
            if let Some(end) = ends_at(status) {
                output.push_str(&format!("   Ends at:   {end}\n"));
            }
            output
        }
    }
}

fn ends_at(status: &ModeStatus) -> Option<String> {
    if status.mode != Mode::Focus {
        return None;
    }
    Local
        .timestamp_millis_opt(status.focus_end_time_epoch_ms)
        .single()
        .map(|end| end.format("%H:%M").to_string())
}

/// `HH:MM:SS`, clamped at zero.
pub fn format_clock(milliseconds: i64) -> String {
    let total_seconds = milliseconds.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
