use serde::{Deserialize, Serialize};

const MILLIS_PER_MINUTE: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Normal,
    Focus,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Focus => "focus",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable snapshot of the current mode. A transition publishes a new
/// snapshot, it never edits an existing one.
///
/// `Normal` snapshots always carry a zero deadline and zero duration; `Focus`
/// snapshots always end exactly `focus_duration_minutes` after they started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeState {
    mode: Mode,
    focus_end_time_epoch_ms: i64,
    focus_duration_minutes: u32,
    mode_start_time_epoch_ms: i64,
}

impl ModeState {
    pub fn normal(now_epoch_ms: i64) -> Self {
        Self {
            mode: Mode::Normal,
            focus_end_time_epoch_ms: 0,
            focus_duration_minutes: 0,
            mode_start_time_epoch_ms: now_epoch_ms,
        }
    }

    pub fn focus(now_epoch_ms: i64, duration_minutes: u32) -> Self {
        Self {
            mode: Mode::Focus,
            focus_end_time_epoch_ms: now_epoch_ms
                + i64::from(duration_minutes) * MILLIS_PER_MINUTE,
            focus_duration_minutes: duration_minutes,
            mode_start_time_epoch_ms: now_epoch_ms,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_focus(&self) -> bool {
        self.mode == Mode::Focus
    }

    pub fn focus_end_time_epoch_ms(&self) -> i64 {
        self.focus_end_time_epoch_ms
    }

    pub fn focus_duration_minutes(&self) -> u32 {
        self.focus_duration_minutes
    }

    pub fn mode_start_time_epoch_ms(&self) -> i64 {
        self.mode_start_time_epoch_ms
    }

    pub fn total_duration_ms(&self) -> i64 {
        i64::from(self.focus_duration_minutes) * MILLIS_PER_MINUTE
    }

    pub fn remaining_ms(&self, now_epoch_ms: i64) -> i64 {
        if !self.is_focus() {
            return 0;
        }
        (self.focus_end_time_epoch_ms - now_epoch_ms).max(0)
    }

    pub fn elapsed_ms(&self, now_epoch_ms: i64) -> i64 {
        if !self.is_focus() {
            return 0;
        }
        (self.total_duration_ms() - self.remaining_ms(now_epoch_ms)).max(0)
    }

    pub fn progress_percentage(&self, now_epoch_ms: i64) -> f64 {
        if !self.is_focus() {
            return 0.0;
        }

        let total = self.total_duration_ms();
        if total <= 0 {
            return 0.0;
        }

        let elapsed = self.elapsed_ms(now_epoch_ms) as f64;
        (elapsed * 100.0 / total as f64).min(100.0)
    }

    pub fn is_expired(&self, now_epoch_ms: i64) -> bool {
        self.is_focus() && self.remaining_ms(now_epoch_ms) <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn normal_state_has_no_deadline() {
        let state = ModeState::normal(NOW);

        assert_eq!(state.mode(), Mode::Normal);
        assert_eq!(state.focus_end_time_epoch_ms(), 0);
        assert_eq!(state.focus_duration_minutes(), 0);
        assert_eq!(state.mode_start_time_epoch_ms(), NOW);
        assert_eq!(state.remaining_ms(NOW), 0);
        assert_eq!(state.elapsed_ms(NOW), 0);
        assert_eq!(state.progress_percentage(NOW), 0.0);
        assert!(!state.is_expired(NOW));
    }

    #[test]
    fn focus_state_ends_after_requested_duration() {
        let state = ModeState::focus(NOW, 45);

        assert!(state.is_focus());
        assert_eq!(state.focus_end_time_epoch_ms(), NOW + 45 * 60_000);
        assert_eq!(state.remaining_ms(NOW), 45 * 60_000);
        assert_eq!(state.elapsed_ms(NOW + 60_000), 60_000);
    }

    #[test]
    fn focus_state_in_the_past_is_expired() {
        let started = NOW - 120 * 60_000;
        let state = ModeState::focus(started, 60);

        assert_eq!(state.remaining_ms(NOW), 0);
        assert!(state.is_expired(NOW));
        assert_eq!(state.progress_percentage(NOW), 100.0);
    }

    #[test]
    fn progress_is_half_way_at_midpoint() {
        let state = ModeState::focus(NOW, 60);

        let progress = state.progress_percentage(NOW + 30 * 60_000);

        assert!((progress - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_duration_focus_does_not_divide_by_zero() {
        let state = ModeState::focus(NOW, 0);

        assert_eq!(state.progress_percentage(NOW), 0.0);
        assert!(state.is_expired(NOW));
    }

    #[test]
    fn clock_stepping_back_before_start_never_goes_negative() {
        let state = ModeState::focus(NOW, 60);

        assert_eq!(state.elapsed_ms(NOW - 5 * 60_000), 0);
        assert_eq!(state.progress_percentage(NOW - 5 * 60_000), 0.0);
    }
}
