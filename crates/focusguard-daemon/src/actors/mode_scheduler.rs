use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Local, LocalResult, NaiveTime};
use tokio::sync::broadcast;
use tokio::time::{interval, sleep, Duration, MissedTickBehavior};
use tracing::{debug, info};

use focusguard_core::{Clock, ModeManager};

const ONE_DAY: Duration = Duration::from_secs(24 * 3600);

/// Drives the two mode timers: the periodic expiry check and the daily reset.
pub struct ModeSchedulerActor {
    modes: Arc<ModeManager>,
    clock: Arc<dyn Clock>,
    expiry_check: Duration,
    daily_reset: NaiveTime,
}

impl ModeSchedulerActor {
    pub fn new(
        modes: Arc<ModeManager>,
        clock: Arc<dyn Clock>,
        expiry_check: Duration,
        daily_reset: NaiveTime,
    ) -> Self {
        Self {
            modes,
            clock,
            expiry_check,
            daily_reset,
        }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        info!(
            expiry_check_seconds = self.expiry_check.as_secs(),
            daily_reset = %self.daily_reset,
            "mode scheduler started"
        );

        let mut expiry = interval(self.expiry_check);
        expiry.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let reset_delay = delay_until_next(self.clock.now(), self.daily_reset);
            let hours = reset_delay.as_secs() / 3600;
            let minutes = (reset_delay.as_secs() % 3600) / 60;
            debug!(hours, minutes, "next daily reset scheduled");

            let reset = sleep(reset_delay);
            tokio::pin!(reset);

            loop {
                tokio::select! {
                    _ = expiry.tick() => {
                        self.modes.check_expiry();
                    }
                    _ = &mut reset => {
                        info!("daily reset");
                        self.modes.force_normal_mode();
                        break;
                    }
                    _ = shutdown.recv() => {
                        debug!("mode scheduler shutdown");
                        return;
                    }
                }
            }
        }
    }
}

/// Time from `now` to the next occurrence of `target`. A target equal to
/// `now` counts as tomorrow's.
fn delay_until_next(now: DateTime<Local>, target: NaiveTime) -> Duration {
    let days_ahead = if now.time() < target { 0 } else { 1 };
    let target_date = now.date_naive() + ChronoDuration::days(days_ahead);

    let target_datetime = match target_date.and_time(target).and_local_timezone(Local) {
        LocalResult::Single(datetime) => datetime,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => return ONE_DAY,
    };

    let seconds = target_datetime.signed_duration_since(now).num_seconds();
    Duration::from_secs(seconds.max(1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use focusguard_core::{FocusPolicy, ManualClock, Mode, ModeChange, TransitionReason};
    use std::sync::Mutex;

    fn local(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 6, hour, minute, 0).unwrap()
    }

    fn five_pm() -> NaiveTime {
        NaiveTime::from_hms_opt(17, 0, 0).unwrap()
    }

    #[test]
    fn reset_later_today() {
        let delay = delay_until_next(local(9, 30), five_pm());

        assert_eq!(delay, Duration::from_secs((7 * 60 + 30) * 60));
    }

    #[test]
    fn reset_tomorrow_once_passed() {
        let delay = delay_until_next(local(18, 0), five_pm());

        assert_eq!(delay, Duration::from_secs(23 * 3600));
    }

    #[test]
    fn reset_exactly_now_rolls_to_tomorrow() {
        let delay = delay_until_next(local(17, 0), five_pm());

        assert_eq!(delay, ONE_DAY);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_tick_returns_to_normal_mode() {
        let clock = Arc::new(ManualClock::at(local(9, 0)));
        let modes = Arc::new(ModeManager::new(FocusPolicy::default(), clock.clone()));
        assert!(modes.switch_to_focus_mode(15));
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

        let scheduler = ModeSchedulerActor::new(
            modes.clone(),
            clock.clone(),
            Duration::from_secs(60),
            five_pm(),
        );
        let task = tokio::spawn(scheduler.run(shutdown_receiver));

        clock.advance(ChronoDuration::minutes(16));
        sleep(Duration::from_secs(61)).await;

        assert_eq!(modes.current_mode(), Mode::Normal);

        shutdown_sender.send(()).unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn daily_reset_forces_normal_and_rearms_for_next_day() {
        let clock = Arc::new(ManualClock::at(local(16, 30)));
        let modes = Arc::new(ModeManager::new(FocusPolicy::default(), clock.clone()));
        let reasons = Arc::new(Mutex::new(Vec::new()));
        let sink = reasons.clone();
        let _subscription =
            modes.subscribe(move |change: &ModeChange| sink.lock().unwrap().push(change.reason));
        assert!(modes.switch_to_focus_mode(480));
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

        let scheduler = ModeSchedulerActor::new(
            modes.clone(),
            clock.clone(),
            Duration::from_secs(60),
            five_pm(),
        );
        let task = tokio::spawn(scheduler.run(shutdown_receiver));
        sleep(Duration::from_millis(1)).await;

        clock.advance(ChronoDuration::minutes(30));
        sleep(Duration::from_secs(30 * 60 + 1)).await;
        assert_eq!(modes.current_mode(), Mode::Normal);

        clock.set(Local.with_ymd_and_hms(2024, 5, 7, 10, 0, 0).unwrap());
        assert!(modes.switch_to_focus_mode(480));
        clock.set(Local.with_ymd_and_hms(2024, 5, 7, 17, 0, 0).unwrap());
        sleep(ONE_DAY).await;
        assert_eq!(modes.current_mode(), Mode::Normal);

        assert_eq!(
            *reasons.lock().unwrap(),
            vec![
                TransitionReason::FocusStarted,
                TransitionReason::DailyReset,
                TransitionReason::FocusStarted,
                TransitionReason::DailyReset,
            ]
        );

        shutdown_sender.send(()).unwrap();
        task.await.unwrap();
    }
}
