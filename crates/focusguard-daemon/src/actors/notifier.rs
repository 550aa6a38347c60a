use focusguard_core::{ModeChange, NotificationUrgency, TransitionReason};
use notify_rust::{Notification, Urgency};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const APP_NAME: &str = "Focusguard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierMessage {
    FocusStarted { duration_minutes: u32 },
    FocusEnded { reason: TransitionReason },
}

impl NotifierMessage {
    pub fn from_change(change: &ModeChange) -> Self {
        match change.reason {
            TransitionReason::FocusStarted => Self::FocusStarted {
                duration_minutes: change.current.focus_duration_minutes(),
            },
            reason => Self::FocusEnded { reason },
        }
    }

    fn summary_and_body(&self) -> (String, String) {
        match self {
            Self::FocusStarted { duration_minutes } => (
                format!("{APP_NAME} - Focus started"),
                format!("Focus mode on for {duration_minutes} min. Distracting sites are blocked."),
            ),
            Self::FocusEnded { reason } => {
                let body = match reason {
                    TransitionReason::Expired => "Focus session complete. Back to normal mode.",
                    TransitionReason::DailyReset => "Daily reset: focus mode ended for today.",
                    _ => "Focus mode stopped. Back to normal mode.",
                };
                (format!("{APP_NAME} - Focus ended"), body.to_string())
            }
        }
    }
}

#[derive(Clone)]
pub struct NotifierHandle {
    sender: mpsc::Sender<NotifierMessage>,
}

impl NotifierHandle {
    /// Safe to call from a mode listener: never blocks, drops the message
    /// when the queue is full.
    pub fn send_mode_change(&self, change: &ModeChange) {
        if let Err(error) = self.sender.try_send(NotifierMessage::from_change(change)) {
            warn!(%error, "failed to queue mode change notification");
        }
    }
}

pub struct NotifierActor {
    receiver: mpsc::Receiver<NotifierMessage>,
    urgency: Urgency,
}

impl NotifierActor {
    pub fn new(urgency: NotificationUrgency) -> (Self, NotifierHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let urgency = match urgency {
            NotificationUrgency::Low => Urgency::Low,
            NotificationUrgency::Normal => Urgency::Normal,
            NotificationUrgency::Critical => Urgency::Critical,
        };

        (Self { receiver, urgency }, NotifierHandle { sender })
    }

    pub async fn run(mut self) {
        info!("notifier actor started");

        while let Some(message) = self.receiver.recv().await {
            let (summary, body) = message.summary_and_body();
            match self.build_notification(&summary, &body).show() {
                Ok(_) => debug!(?message, "notification sent"),
                Err(error) => warn!(%error, ?message, "failed to show notification"),
            }
        }

        debug!("notifier actor stopped");
    }

    fn build_notification(&self, summary: &str, body: &str) -> Notification {
        let mut notification = Notification::new();
        notification
            .summary(summary)
            .body(body)
            .urgency(self.urgency)
            .appname(APP_NAME);
        notification
    }
}
