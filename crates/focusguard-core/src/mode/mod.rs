mod listeners;
mod manager;

pub use listeners::{ModeChange, ModeSubscription, TransitionReason};
pub use manager::{wall_time, FocusPolicy, FocusRejection, ModeManager, ModeStatus};
