use std::sync::Arc;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

use super::listeners::{ListenerRegistry, ModeChange, ModeSubscription, TransitionReason};
use crate::clock::Clock;
use crate::config::PolicyConfig;
use crate::domain::{Mode, ModeState};

const FALLBACK_HOUR: u32 = 17;

/// Builds a wall-clock time, falling back to 17:00 for out-of-range input.
pub fn wall_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .or_else(|| NaiveTime::from_hms_opt(FALLBACK_HOUR, 0, 0))
        .unwrap_or(NaiveTime::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPolicy {
    pub min_focus_minutes: u32,
    pub max_focus_minutes: u32,
    pub cutoff: NaiveTime,
}

impl From<&PolicyConfig> for FocusPolicy {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            min_focus_minutes: config.min_focus_minutes,
            max_focus_minutes: config.max_focus_minutes,
            cutoff: wall_time(config.cutoff_hour, config.cutoff_minute),
        }
    }
}

impl Default for FocusPolicy {
    fn default() -> Self {
        Self::from(&PolicyConfig::default())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRejection {
    #[error("focus duration must be between {min} and {max} minutes, got {requested}")]
    DurationOutOfBounds { requested: u32, min: u32, max: u32 },

    #[error("focus mode is already active")]
    AlreadyInFocus,

    #[error("focus mode cannot start at or after {cutoff}")]
    PastCutoff { cutoff: NaiveTime },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeStatus {
    pub mode: Mode,
    pub remaining_ms: i64,
    pub elapsed_ms: i64,
    pub progress_percentage: f64,
    pub focus_duration_minutes: u32,
    pub mode_start_time_epoch_ms: i64,
    pub focus_end_time_epoch_ms: i64,
}

/// Single source of truth for NORMAL/FOCUS.
///
/// Each transition publishes a fresh [`ModeState`] through a watch channel;
/// readers always see a complete snapshot. Listener callbacks run on the
/// thread that performed the transition.
pub struct ModeManager {
    clock: Arc<dyn Clock>,
    policy: FocusPolicy,
    state: watch::Sender<ModeState>,
    listeners: Arc<ListenerRegistry>,
}

impl ModeManager {
    pub fn new(policy: FocusPolicy, clock: Arc<dyn Clock>) -> Self {
        let initial = ModeState::normal(clock.now_millis());
        Self::with_initial_state(policy, clock, initial)
    }

    pub fn with_initial_state(
        policy: FocusPolicy,
        clock: Arc<dyn Clock>,
        initial: ModeState,
    ) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            clock,
            policy,
            state,
            listeners: Arc::new(ListenerRegistry::default()),
        }
    }

    pub fn policy(&self) -> FocusPolicy {
        self.policy
    }

    pub fn try_switch_to_focus_mode(
        &self,
        duration_minutes: u32,
    ) -> Result<ModeState, FocusRejection> {
        let FocusPolicy {
            min_focus_minutes,
            max_focus_minutes,
            cutoff,
        } = self.policy;

        if !(min_focus_minutes..=max_focus_minutes).contains(&duration_minutes) {
            return Err(FocusRejection::DurationOutOfBounds {
                requested: duration_minutes,
                min: min_focus_minutes,
                max: max_focus_minutes,
            });
        }

        let now = self.clock.now();
        if now.time() >= cutoff {
            return Err(FocusRejection::PastCutoff { cutoff });
        }

        let next = ModeState::focus(now.timestamp_millis(), duration_minutes);
        let mut previous = None;
        self.state.send_if_modified(|state| {
            if state.is_focus() {
                return false;
            }
            previous = Some(*state);
            *state = next;
            true
        });

        let previous = previous.ok_or(FocusRejection::AlreadyInFocus)?;

        info!(duration_minutes, "switched to focus mode");
        self.listeners.notify(&ModeChange {
            previous,
            current: next,
            reason: TransitionReason::FocusStarted,
        });

        Ok(next)
    }

    /// Returns true iff a new focus snapshot was installed.
    pub fn switch_to_focus_mode(&self, duration_minutes: u32) -> bool {
        match self.try_switch_to_focus_mode(duration_minutes) {
            Ok(_) => true,
            Err(rejection) => {
                debug!(%rejection, "focus mode request rejected");
                false
            }
        }
    }

    /// No-op when already in normal mode.
    pub fn switch_to_normal_mode(&self) {
        self.leave_focus_if(TransitionReason::ManualExit, ModeState::is_focus);
    }

    /// Leaves focus mode once its deadline has passed. Returns true when a
    /// transition happened.
    pub fn check_expiry(&self) -> bool {
        let now = self.clock.now_millis();
        self.leave_focus_if(TransitionReason::Expired, |state| state.is_expired(now))
    }

    /// Daily hard reset: installs a fresh normal snapshot regardless of any
    /// remaining focus time. Listeners only hear about it when focus was
    /// actually interrupted.
    pub fn force_normal_mode(&self) {
        let next = ModeState::normal(self.clock.now_millis());
        let previous = self.state.send_replace(next);

        if previous.is_focus() {
            info!(
                remaining_ms = previous.remaining_ms(next.mode_start_time_epoch_ms()),
                "daily reset interrupted focus mode"
            );
            self.listeners.notify(&ModeChange {
                previous,
                current: next,
                reason: TransitionReason::DailyReset,
            });
        } else {
            debug!("daily reset applied while already in normal mode");
        }
    }

    /// Swaps in a normal snapshot only if `condition` still holds for the
    /// snapshot being replaced, checked under the channel lock.
    fn leave_focus_if<F>(&self, reason: TransitionReason, condition: F) -> bool
    where
        F: Fn(&ModeState) -> bool,
    {
        let next = ModeState::normal(self.clock.now_millis());
        let mut previous = None;
        self.state.send_if_modified(|state| {
            if !state.is_focus() || !condition(state) {
                return false;
            }
            previous = Some(*state);
            *state = next;
            true
        });

        let Some(previous) = previous else {
            debug!(?reason, "no transition, snapshot did not qualify");
            return false;
        };

        info!(?reason, "switched to normal mode");
        self.listeners.notify(&ModeChange {
            previous,
            current: next,
            reason,
        });
        true
    }

    pub fn snapshot(&self) -> ModeState {
        *self.state.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<ModeState> {
        self.state.subscribe()
    }

    pub fn subscribe<F>(&self, callback: F) -> ModeSubscription
    where
        F: Fn(&ModeChange) + Send + Sync + 'static,
    {
        self.listeners.register(Arc::new(callback))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn current_mode(&self) -> Mode {
        self.snapshot().mode()
    }

    pub fn is_in_focus_mode(&self) -> bool {
        self.snapshot().is_focus()
    }

    pub fn remaining_time_ms(&self) -> i64 {
        self.snapshot().remaining_ms(self.clock.now_millis())
    }

    pub fn elapsed_time_ms(&self) -> i64 {
        self.snapshot().elapsed_ms(self.clock.now_millis())
    }

    pub fn progress_percentage(&self) -> f64 {
        self.snapshot().progress_percentage(self.clock.now_millis())
    }

    pub fn status(&self) -> ModeStatus {
        let state = self.snapshot();
        let now = self.clock.now_millis();
        ModeStatus {
            mode: state.mode(),
            remaining_ms: state.remaining_ms(now),
            elapsed_ms: state.elapsed_ms(now),
            progress_percentage: state.progress_percentage(now),
            focus_duration_minutes: state.focus_duration_minutes(),
            mode_start_time_epoch_ms: state.mode_start_time_epoch_ms(),
            focus_end_time_epoch_ms: state.focus_end_time_epoch_ms(),
        }
    }
}
