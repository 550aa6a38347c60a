use crate::client::DaemonClient;
use anyhow::{bail, Result};
use focusguard_protocol::{Request, Response};

pub async fn block(entry: String) -> Result<()> {
    if entry.trim().is_empty() {
        bail!("nothing to block: the entry is empty");
    }

    let request = Request::BlockSite {
        entry: entry.clone(),
    };
    match DaemonClient::new().send(request).await {
        Ok(Response::Ok) => {
            println!("🚫 Blocked during focus: {}", entry.trim());
            Ok(())
        }
        Ok(response) => super::unexpected(response),
        Err(error) => super::client_failure(error),
    }
}

pub async fn list() -> Result<()> {
    match DaemonClient::new().send(Request::ListBlockedSites).await {
        Ok(Response::BlockedSites(entries)) => {
            print!("{}", render_list(&entries));
            Ok(())
        }
        Ok(response) => super::unexpected(response),
        Err(error) => super::client_failure(error),
    }
}

fn render_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return "No user-blocked sites\n".to_string();
    }
    entries.iter().map(|entry| format!("  {entry}\n")).collect()
}
