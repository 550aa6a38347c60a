//! Tiered blocking decisions.
//!
//! Tiers are evaluated in a fixed order and the first match wins:
//!
//! 1. hardcoded (URL or title, any mode)
//! 2. soft (URL, focus only, ignores the whitelist)
//! 3. exact-match home pages (URL, focus only)
//! 4. whitelist (title, any mode, only shields tier 5)
//! 5. user-defined (URL, focus only)

use crate::domain::{Decision, EnforcementAction, MatchedTier, Mode};
use crate::rules::RuleSet;

pub fn decide(rules: &RuleSet, url: &str, title: &str, mode: Mode) -> Decision {
    if url.is_empty() && title.is_empty() {
        return Decision::allow();
    }

    if rules.hardcoded_matches(url) || rules.hardcoded_matches(title) {
        return Decision::new(MatchedTier::Hardcoded, rules.hardcoded_action());
    }

    let focus = mode == Mode::Focus;

    if focus && rules.soft_matches(url) {
        return Decision::new(MatchedTier::Soft, EnforcementAction::OpenBlankTab);
    }

    if focus && rules.exact_home_page_matches(url) {
        return Decision::new(MatchedTier::ExactMatch, EnforcementAction::OpenBlankTab);
    }

    if rules.whitelist_matches(title) {
        return Decision::new(MatchedTier::Whitelisted, EnforcementAction::None);
    }

    if focus && rules.user_block_matches(url) {
        return Decision::new(MatchedTier::UserDefined, EnforcementAction::OpenBlankTab);
    }

    Decision::allow()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::UserBlockList;

    const MODES: [Mode; 2] = [Mode::Normal, Mode::Focus];

    fn rules() -> RuleSet {
        RuleSet::new()
            .with_hardcoded(["casino"])
            .with_soft(["video-site.example/watch"])
            .with_exact_match(["news.example"])
            .with_whitelist(["Docs"])
            .with_user_blocked(UserBlockList::in_memory(["forum.example"]))
    }

    #[test]
    fn hardcoded_wins_over_every_lower_tier_in_any_mode() {
        let rules = RuleSet::new()
            .with_hardcoded(["casino"])
            .with_soft(["casino"])
            .with_exact_match(["casino.example"])
            .with_whitelist(["Docs"])
            .with_user_blocked(UserBlockList::in_memory(["casino"]));

        for mode in MODES {
            let decision = decide(&rules, "https://casino.example/", "Docs", mode);

            assert_eq!(decision.tier, MatchedTier::Hardcoded);
            assert_eq!(decision.action, EnforcementAction::CloseTab);
        }
    }

    #[test]
    fn hardcoded_matches_title_alone() {
        let decision = decide(
            &rules(),
            "https://search.example/?q=x",
            "Top Casino offers",
            Mode::Normal,
        );

        assert_eq!(decision.action, EnforcementAction::CloseTab);
    }

    #[test]
    fn hardcoded_action_follows_configuration() {
        let rules = rules().with_hardcoded_action(EnforcementAction::CloseApp);

        let decision = decide(&rules, "https://casino.example/", "", Mode::Normal);

        assert_eq!(decision.action, EnforcementAction::CloseApp);
    }

    #[test]
    fn focus_only_tiers_are_inert_in_normal_mode() {
        let rules = rules();
        let urls = [
            "https://video-site.example/watch?id=1",
            "https://news.example/",
            "https://forum.example/thread/9",
        ];

        for url in urls {
            let decision = decide(&rules, url, "Some page", Mode::Normal);
            assert_eq!(decision, Decision::allow(), "{url}");
        }
    }

    #[test]
    fn soft_tier_redirects_in_focus_mode() {
        let decision = decide(
            &rules(),
            "https://video-site.example/watch?id=1",
            "A video",
            Mode::Focus,
        );

        assert_eq!(decision.tier, MatchedTier::Soft);
        assert_eq!(decision.action, EnforcementAction::OpenBlankTab);
    }

    #[test]
    fn soft_tier_ignores_whitelist() {
        let decision = decide(
            &rules(),
            "https://video-site.example/watch?id=1",
            "Docs walkthrough",
            Mode::Focus,
        );

        assert_eq!(decision.tier, MatchedTier::Soft);
    }

    #[test]
    fn exact_tier_only_blocks_home_pages() {
        let rules = rules();

        let home = decide(&rules, "https://news.example/", "News", Mode::Focus);
        let index = decide(&rules, "https://news.example/index.html", "News", Mode::Focus);
        let article = decide(&rules, "https://news.example/article/123", "News", Mode::Focus);

        assert_eq!(home.tier, MatchedTier::ExactMatch);
        assert_eq!(index.action, EnforcementAction::OpenBlankTab);
        assert_eq!(article, Decision::allow());
    }

    #[test]
    fn whitelist_shields_user_tier_only() {
        let rules = rules();

        let shielded = decide(&rules, "https://forum.example/t/1", "Docs thread", Mode::Focus);
        let blocked = decide(&rules, "https://forum.example/t/1", "Random thread", Mode::Focus);

        assert_eq!(shielded.tier, MatchedTier::Whitelisted);
        assert_eq!(shielded.action, EnforcementAction::None);
        assert_eq!(blocked.tier, MatchedTier::UserDefined);
        assert_eq!(blocked.action, EnforcementAction::OpenBlankTab);
    }

    #[test]
    fn whitelisted_title_with_hardcoded_term_still_closes() {
        let decision = decide(
            &rules(),
            "https://blog.example/",
            "Docs about casino math",
            Mode::Focus,
        );

        assert_eq!(decision.action, EnforcementAction::CloseTab);
    }

    #[test]
    fn malformed_url_still_reaches_substring_tiers() {
        let decision = decide(&rules(), "forum.example/board", "Board", Mode::Focus);

        assert_eq!(decision.tier, MatchedTier::UserDefined);
    }

    #[test]
    fn empty_snapshot_takes_no_action() {
        for mode in MODES {
            assert_eq!(decide(&rules(), "", "", mode), Decision::allow());
        }
    }

    #[test]
    fn same_url_flips_with_mode() {
        let rules = rules();
        let url = "https://video-site.example/watch?id=1";

        assert_eq!(
            decide(&rules, url, "", Mode::Focus).action,
            EnforcementAction::OpenBlankTab
        );
        assert_eq!(
            decide(&rules, url, "", Mode::Normal).action,
            EnforcementAction::None
        );
    }
}
