use std::collections::HashSet;

use url::Url;

use super::UserBlockList;
use crate::config::RulesConfig;
use crate::domain::EnforcementAction;

const INDEX_PAGES: &[&str] = &["/index.html", "/index.htm", "/index.php"];

/// How whitelist entries are compared with page titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitelistCase {
    #[default]
    Sensitive,
    Insensitive,
}

/// The five rule tiers consulted by the decision engine.
///
/// Hardcoded, soft and exact-match entries are normalized to lowercase on
/// construction so probes only need lowercasing once.
pub struct RuleSet {
    hardcoded: HashSet<String>,
    soft: HashSet<String>,
    exact_match: HashSet<String>,
    whitelist: HashSet<String>,
    whitelist_case: WhitelistCase,
    hardcoded_action: EnforcementAction,
    user_blocked: UserBlockList,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            hardcoded: HashSet::new(),
            soft: HashSet::new(),
            exact_match: HashSet::new(),
            whitelist: HashSet::new(),
            whitelist_case: WhitelistCase::Sensitive,
            hardcoded_action: EnforcementAction::CloseTab,
            user_blocked: UserBlockList::default(),
        }
    }

    pub fn from_config(config: &RulesConfig) -> Self {
        let whitelist_case = if config.whitelist_case_sensitive {
            WhitelistCase::Sensitive
        } else {
            WhitelistCase::Insensitive
        };

        Self::new()
            .with_hardcoded(config.hardcoded.iter())
            .with_soft(config.soft.iter())
            .with_exact_match(config.exact_match.iter())
            .with_whitelist_case(whitelist_case)
            .with_hardcoded_action(config.hardcoded_action.into())
    }

    pub fn with_hardcoded<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hardcoded = normalize(entries);
        self
    }

    pub fn with_soft<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.soft = normalize(entries);
        self
    }

    pub fn with_exact_match<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exact_match = normalize(entries)
            .into_iter()
            .map(|domain| strip_www(&domain).to_string())
            .collect();
        self
    }

    pub fn with_whitelist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.whitelist = entries
            .into_iter()
            .map(|entry| entry.as_ref().to_string())
            .filter(|entry| !entry.trim().is_empty())
            .collect();
        self
    }

    pub fn with_whitelist_case(mut self, whitelist_case: WhitelistCase) -> Self {
        self.whitelist_case = whitelist_case;
        self
    }

    pub fn with_hardcoded_action(mut self, action: EnforcementAction) -> Self {
        self.hardcoded_action = action;
        self
    }

    pub fn with_user_blocked(mut self, user_blocked: UserBlockList) -> Self {
        self.user_blocked = user_blocked;
        self
    }

    pub fn hardcoded_action(&self) -> EnforcementAction {
        self.hardcoded_action
    }

    pub fn user_blocked(&self) -> &UserBlockList {
        &self.user_blocked
    }

    pub fn hardcoded_matches(&self, probe: &str) -> bool {
        contains_any(&self.hardcoded, probe)
    }

    pub fn soft_matches(&self, url: &str) -> bool {
        contains_any(&self.soft, url)
    }

    /// True when `url` points at the home page of an exact-match domain.
    /// Unparseable URLs never match.
    pub fn exact_home_page_matches(&self, url: &str) -> bool {
        if self.exact_match.is_empty() {
            return false;
        }

        home_page_host(url)
            .map(|host| self.exact_match.contains(&host))
            .unwrap_or(false)
    }

    pub fn whitelist_matches(&self, title: &str) -> bool {
        if title.is_empty() {
            return false;
        }

        match self.whitelist_case {
            WhitelistCase::Sensitive => self
                .whitelist
                .iter()
                .any(|entry| title.contains(entry.as_str())),
            WhitelistCase::Insensitive => {
                let title = title.to_lowercase();
                self.whitelist
                    .iter()
                    .any(|entry| title.contains(&entry.to_lowercase()))
            }
        }
    }

    pub fn user_block_matches(&self, url: &str) -> bool {
        self.user_blocked.matches(url)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize<I, S>(entries: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn contains_any(entries: &HashSet<String>, probe: &str) -> bool {
    if probe.is_empty() {
        return false;
    }

    let probe = probe.to_lowercase();
    entries.iter().any(|entry| probe.contains(entry.as_str()))
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Lowercased host without `www.` when `url` is a home page: empty path, `/`
/// or one of the index documents.
fn home_page_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    let path = parsed.path().to_lowercase();
    let is_home = path.is_empty() || path == "/" || INDEX_PAGES.contains(&path.as_str());
    if !is_home {
        return None;
    }

    Some(strip_www(&host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::new()
            .with_hardcoded(["Casino"])
            .with_soft(["video-site.example/watch"])
            .with_exact_match(["www.News.Example"])
            .with_whitelist(["Rust"])
    }

    #[test]
    fn hardcoded_match_is_case_insensitive_substring() {
        let rules = rules();

        assert!(rules.hardcoded_matches("https://CASINO.example/"));
        assert!(rules.hardcoded_matches("Best casino bonuses"));
        assert!(!rules.hardcoded_matches("https://bank.example/"));
        assert!(!rules.hardcoded_matches(""));
    }

    #[test]
    fn soft_match_is_case_insensitive_substring() {
        let rules = rules();

        assert!(rules.soft_matches("https://Video-Site.example/watch?id=1"));
        assert!(!rules.soft_matches("https://video-site.example/"));
    }

    #[test]
    fn exact_match_accepts_home_pages_only() {
        let rules = rules();

        assert!(rules.exact_home_page_matches("https://news.example"));
        assert!(rules.exact_home_page_matches("https://news.example/"));
        assert!(rules.exact_home_page_matches("https://www.news.example/"));
        assert!(rules.exact_home_page_matches("https://NEWS.example/Index.HTML"));
        assert!(rules.exact_home_page_matches("https://news.example/index.php?ref=1#top"));
        assert!(rules.exact_home_page_matches("http://news.example/index.htm"));
        assert!(!rules.exact_home_page_matches("https://news.example/article/123"));
        assert!(!rules.exact_home_page_matches("https://sports.news.example/"));
        assert!(!rules.exact_home_page_matches("https://other.example/"));
    }

    #[test]
    fn malformed_url_never_matches_exact_tier() {
        let rules = rules();

        assert!(!rules.exact_home_page_matches("news.example/"));
        assert!(!rules.exact_home_page_matches("not a url"));
        assert!(!rules.exact_home_page_matches(""));
    }

    #[test]
    fn whitelist_is_case_sensitive_by_default() {
        let rules = rules();

        assert!(rules.whitelist_matches("The Rust Programming Language"));
        assert!(!rules.whitelist_matches("the rust programming language"));
    }

    #[test]
    fn whitelist_case_can_be_relaxed() {
        let rules = rules().with_whitelist_case(WhitelistCase::Insensitive);

        assert!(rules.whitelist_matches("the rust programming language"));
    }

    #[test]
    fn from_config_normalizes_tiers() {
        let config = RulesConfig {
            hardcoded: vec!["  SPAM ".to_string(), "".to_string()],
            soft: vec![],
            exact_match: vec!["WWW.Feed.Example".to_string()],
            whitelist_case_sensitive: false,
            hardcoded_action: crate::config::HardcodedAction::CloseApp,
        };

        let rules = RuleSet::from_config(&config);

        assert!(rules.hardcoded_matches("https://spam.example"));
        assert!(!rules.hardcoded_matches("https://ham.example"));
        assert!(rules.exact_home_page_matches("https://feed.example/"));
        assert_eq!(rules.hardcoded_action(), EnforcementAction::CloseApp);
    }
}
