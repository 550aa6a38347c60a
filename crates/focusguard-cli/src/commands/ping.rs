use crate::client::DaemonClient;
use anyhow::Result;
use focusguard_protocol::{Request, Response};

pub async fn execute() -> Result<()> {
    match DaemonClient::new().send(Request::Ping).await {
        Ok(Response::Pong) => {
            println!("🟢 Daemon is running");
            Ok(())
        }
        Ok(response) => super::unexpected(response),
        Err(error) => super::client_failure(error),
    }
}
