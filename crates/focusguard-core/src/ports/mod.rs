mod automation;
mod block_list_repository;
mod browser;
mod foreground;

pub use automation::ScriptRunner;
pub use block_list_repository::{BlockListRepository, BlockListRepositoryError};
pub use browser::Browser;
pub use foreground::ForegroundApp;
