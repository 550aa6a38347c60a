//! Focusguard core library
//!
//! Contains the mode state machine, the rule tiers, the blocking decision
//! engine and the port definitions (traits) for browsers, OS automation and
//! block-list storage. This crate has no knowledge of infrastructure concerns.

pub mod clock;
pub mod config;
pub mod decision;
pub mod domain;
pub mod mode;
pub mod ports;
pub mod rules;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    BrowsersConfig, Config, ConfigError, HardcodedAction, NotificationConfig,
    NotificationUrgency, PolicyConfig, RulesConfig, StorageConfig,
};
pub use decision::decide;
pub use domain::{BrowserSnapshot, Decision, EnforcementAction, MatchedTier, Mode, ModeState};
pub use mode::{
    wall_time, FocusPolicy, FocusRejection, ModeChange, ModeManager, ModeStatus,
    ModeSubscription, TransitionReason,
};
pub use ports::{
    BlockListRepository, BlockListRepositoryError, Browser, ForegroundApp, ScriptRunner,
};
pub use rules::{RuleSet, UserBlockList, WhitelistCase};
