mod block;
mod browsers;
mod focus;
mod normal;
mod ping;
mod status;

pub use block::{block, list as blocked};
pub use browsers::execute as browsers;
pub use focus::execute as focus;
pub use normal::execute as normal;
pub use ping::execute as ping;
pub use status::execute as status;

use crate::client::ClientError;
use anyhow::{bail, Result};
use focusguard_protocol::Response;

/// Shared handling for answers a command did not ask for.
fn unexpected(response: Response) -> Result<()> {
    match response {
        Response::Error { message } => bail!("{}", message),
        other => bail!("unexpected response from daemon: {:?}", other),
    }
}

fn client_failure(error: ClientError) -> Result<()> {
    match error {
        ClientError::DaemonNotRunning => {
            eprintln!("⚫ The focusguard daemon is not running");
            eprintln!("   Start it first: focusguard-daemon");
            std::process::exit(1);
        }
        other => bail!("{}", other),
    }
}
