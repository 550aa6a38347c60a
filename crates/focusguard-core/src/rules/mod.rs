pub mod defaults;
mod rule_set;
mod user_block_list;

pub use rule_set::{RuleSet, WhitelistCase};
pub use user_block_list::UserBlockList;
