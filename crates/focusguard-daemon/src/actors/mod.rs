mod mode_scheduler;
mod notifier;
mod tab_guard;

pub use mode_scheduler::ModeSchedulerActor;
pub use notifier::NotifierActor;
pub use tab_guard::TabGuardActor;
