use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{debug, info, trace};

use focusguard_adapters::BrowserRegistry;
use focusguard_core::{
    decide, Browser, BrowserSnapshot, Decision, EnforcementAction, ForegroundApp, MatchedTier,
    ModeManager, RuleSet,
};

/// The poll loop: looks at the foreground browser's active tab and enforces
/// whatever the decision engine returns for the current mode.
pub struct TabGuardActor {
    foreground: Arc<dyn ForegroundApp>,
    browsers: BrowserRegistry,
    rules: Arc<RuleSet>,
    modes: Arc<ModeManager>,
    poll_interval: Duration,
}

impl TabGuardActor {
    pub fn new(
        foreground: Arc<dyn ForegroundApp>,
        browsers: BrowserRegistry,
        rules: Arc<RuleSet>,
        modes: Arc<ModeManager>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            foreground,
            browsers,
            rules,
            modes,
            poll_interval,
        }
    }

    /// Fixed-delay cadence: the next cycle is scheduled only once the
    /// previous one has finished, so polls never overlap.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        info!(
            interval_ms = self.poll_interval.as_millis() as u64,
            browsers = ?self.browsers.supported_browsers(),
            "tab guard started"
        );

        loop {
            self.poll_once().await;

            tokio::select! {
                _ = sleep(self.poll_interval) => {}
                _ = shutdown.recv() => {
                    debug!("tab guard shutdown");
                    break;
                }
            }
        }
    }

    /// One poll cycle. Returns the decision taken, or `None` when the cycle
    /// was skipped (no supported browser in front, nothing readable).
    pub async fn poll_once(&self) -> Option<Decision> {
        let app_name = self.foreground.active_application().await?;
        let Some(browser) = self.browsers.resolve(&app_name) else {
            trace!(app = %app_name, "foreground application is not a supported browser");
            return None;
        };

        let snapshot = BrowserSnapshot::new(
            app_name,
            browser.active_tab_url().await,
            browser.active_tab_title().await,
        );
        if snapshot.is_empty() {
            trace!(browser = %snapshot.app_name, "no tab data this cycle");
            return None;
        }

        let decision = decide(
            &self.rules,
            &snapshot.url,
            &snapshot.title,
            self.modes.current_mode(),
        );
        enforce(browser.as_ref(), decision.action).await;
        report(&snapshot, decision);
        Some(decision)
    }
}

async fn enforce(browser: &dyn Browser, action: EnforcementAction) {
    match action {
        EnforcementAction::None => {}
        EnforcementAction::CloseTab => browser.close_active_tab().await,
        EnforcementAction::OpenBlankTab => browser.open_new_tab().await,
        EnforcementAction::CloseApp => browser.quit_app().await,
    }
}

fn report(snapshot: &BrowserSnapshot, decision: Decision) {
    if decision.tier == MatchedTier::Unmatched {
        return;
    }
    info!(
        target: "blocked_sites",
        tier = decision.tier.label(),
        action = decision.action.as_str(),
        browser = %snapshot.app_name,
        url = %snapshot.url,
        "{}",
        log_line(decision.tier, snapshot)
    );
}

fn log_line(tier: MatchedTier, snapshot: &BrowserSnapshot) -> String {
    format!("{} | {} | {}", tier.label(), snapshot.app_name, snapshot.url)
}
