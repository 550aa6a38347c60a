use crate::client::DaemonClient;
use anyhow::Result;
use focusguard_protocol::{Request, Response};

pub async fn execute() -> Result<()> {
    match DaemonClient::new().send(Request::ListBrowsers).await {
        Ok(Response::Browsers(names)) => {
            if names.is_empty() {
                println!("No browsers are being watched");
            }
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
        Ok(response) => super::unexpected(response),
        Err(error) => super::client_failure(error),
    }
}
