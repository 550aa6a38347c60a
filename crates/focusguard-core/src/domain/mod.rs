mod enforcement;
mod mode;

pub use enforcement::{BrowserSnapshot, Decision, EnforcementAction, MatchedTier};
pub use mode::{Mode, ModeState};
