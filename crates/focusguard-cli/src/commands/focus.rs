use crate::client::DaemonClient;
use anyhow::Result;
use focusguard_protocol::{Request, Response};

use super::status::format_clock;

pub async fn execute(duration_minutes: Option<u32>) -> Result<()> {
    let client = DaemonClient::new();

    match client.send(Request::StartFocus { duration_minutes }).await {
        Ok(Response::Status(status)) => {
            println!("🎯 Focus mode started");
            println!("   Duration: {} min", status.focus_duration_minutes);
            println!("   Remaining: {}", format_clock(status.remaining_ms));
            Ok(())
        }
        Ok(Response::FocusRejected { reason }) => {
            eprintln!("⛔ Focus mode refused: {reason}");
            std::process::exit(2);
        }
        Ok(response) => super::unexpected(response),
        Err(error) => super::client_failure(error),
    }
}
