mod actors;
mod server;

use std::sync::Arc;
use std::time::Duration;

use actors::{ModeSchedulerActor, NotifierActor, TabGuardActor};
use anyhow::Result;
use focusguard_adapters::{BrowserRegistry, FrontmostAppDetector, ProcessScriptRunner, TextFileBlockList};
use focusguard_core::{
    wall_time, BlockListRepository, Clock, Config, FocusPolicy, ModeManager, ModeSubscription,
    RuleSet, ScriptRunner, SystemClock, UserBlockList,
};
use server::{DaemonContext, Server};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const POLL_LOOP_GRACE: Duration = Duration::from_secs(60);
const SCHEDULER_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("focusguard_daemon=debug".parse()?),
        )
        .init();

    info!("focusguard daemon starting");

    let config = Config::load().unwrap_or_else(|error| {
        warn!(%error, "failed to load config, using defaults");
        Config::default()
    });

    let (shutdown_sender, shutdown_receiver) = broadcast::channel::<()>(1);
    let sigint_shutdown_sender = shutdown_sender.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("SIGINT received, initiating shutdown");
        sigint_shutdown_sender.send(()).ok();
    });

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let modes = Arc::new(ModeManager::new(FocusPolicy::from(&config.policy), clock.clone()));
    let _notifications = spawn_notifier(&config, &modes);

    let runner: Arc<dyn ScriptRunner> = Arc::new(ProcessScriptRunner::osascript(
        Duration::from_secs(config.policy.automation_timeout_seconds),
    ));
    let browsers = BrowserRegistry::from_config(&config.browsers, runner.clone());
    let rules = Arc::new(build_rules(&config));

    let context = DaemonContext {
        modes: modes.clone(),
        rules: rules.clone(),
        browsers: browsers.supported_browsers(),
        default_focus_minutes: config.policy.default_focus_minutes,
    };

    let tab_guard = TabGuardActor::new(
        Arc::new(FrontmostAppDetector::new(runner)),
        browsers,
        rules,
        modes.clone(),
        Duration::from_millis(config.policy.poll_interval_ms),
    );
    let tab_guard_task = tokio::spawn(tab_guard.run(shutdown_sender.subscribe()));

    let scheduler = ModeSchedulerActor::new(
        modes,
        clock,
        Duration::from_secs(config.policy.expiry_check_seconds.max(1)),
        wall_time(config.policy.daily_reset_hour, config.policy.daily_reset_minute),
    );
    let scheduler_task = tokio::spawn(scheduler.run(shutdown_sender.subscribe()));

    let server = Server::new(focusguard_protocol::socket_path(), context);
    let served = server.run(shutdown_receiver).await;
    shutdown_sender.send(()).ok();

    await_or_abort("tab guard", tab_guard_task, POLL_LOOP_GRACE).await;
    await_or_abort("mode scheduler", scheduler_task, SCHEDULER_GRACE).await;

    served?;
    info!("focusguard daemon stopped");
    Ok(())
}

fn build_rules(config: &Config) -> RuleSet {
    let whitelist = TextFileBlockList::new(config.storage.white_websites_path())
        .load()
        .unwrap_or_else(|error| {
            warn!(%error, "failed to load whitelist, continuing without it");
            Default::default()
        });
    let user_blocked =
        UserBlockList::load(Arc::new(TextFileBlockList::new(config.storage.blocked_websites_path())));

    info!(
        whitelist = whitelist.len(),
        user_blocked = user_blocked.len(),
        "rules loaded"
    );

    RuleSet::from_config(&config.rules)
        .with_whitelist(whitelist)
        .with_user_blocked(user_blocked)
}

fn spawn_notifier(config: &Config, modes: &ModeManager) -> Option<ModeSubscription> {
    if !config.notifications.enabled {
        info!("desktop notifications disabled");
        return None;
    }

    let (notifier_actor, notifier_handle) =
        NotifierActor::new(config.notifications.urgency.clone());
    tokio::spawn(notifier_actor.run());

    Some(modes.subscribe(move |change| notifier_handle.send_mode_change(change)))
}

async fn await_or_abort(name: &str, task: JoinHandle<()>, grace: Duration) {
    let abort = task.abort_handle();
    match tokio::time::timeout(grace, task).await {
        Ok(Ok(())) => info!(task = name, "stopped"),
        Ok(Err(error)) => warn!(task = name, %error, "task ended abnormally"),
        Err(_) => {
            warn!(task = name, grace_seconds = grace.as_secs(), "did not stop in time, aborting");
            abort.abort();
        }
    }
}
