use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementAction {
    #[default]
    None,
    CloseTab,
    OpenBlankTab,
    CloseApp,
}

impl EnforcementAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnforcementAction::None => "none",
            EnforcementAction::CloseTab => "close_tab",
            EnforcementAction::OpenBlankTab => "open_blank_tab",
            EnforcementAction::CloseApp => "close_app",
        }
    }
}

impl std::fmt::Display for EnforcementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule tier responsible for a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedTier {
    Hardcoded,
    Soft,
    ExactMatch,
    Whitelisted,
    UserDefined,
    Unmatched,
}

impl MatchedTier {
    pub fn label(&self) -> &'static str {
        match self {
            MatchedTier::Hardcoded => "HARDCODED_BLOCKED",
            MatchedTier::Soft => "SOFT_BLOCKED",
            MatchedTier::ExactMatch => "EXACT_MATCH_BLOCKED",
            MatchedTier::Whitelisted => "WHITE_ALLOWED",
            MatchedTier::UserDefined => "USER_BLOCKED",
            MatchedTier::Unmatched => "ALLOWED",
        }
    }
}

impl std::fmt::Display for MatchedTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: EnforcementAction,
    pub tier: MatchedTier,
}

impl Decision {
    pub fn new(tier: MatchedTier, action: EnforcementAction) -> Self {
        Self { action, tier }
    }

    pub fn allow() -> Self {
        Self::new(MatchedTier::Unmatched, EnforcementAction::None)
    }

    pub fn is_enforced(&self) -> bool {
        self.action != EnforcementAction::None
    }
}

/// What the foreground browser reported during one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSnapshot {
    pub app_name: String,
    pub url: String,
    pub title: String,
}

impl BrowserSnapshot {
    pub fn new(
        app_name: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            url: url.into(),
            title: title.into(),
        }
    }

    /// Both reads failed or the window had no tab.
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.title.is_empty()
    }
}
