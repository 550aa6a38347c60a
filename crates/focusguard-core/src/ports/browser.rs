use async_trait::async_trait;

/// Read/act capability set over one browser family.
///
/// Reads return an empty string when the automation call fails; actions are
/// fire-and-forget. Implementations never surface automation errors.
#[async_trait]
pub trait Browser: Send + Sync {
    fn name(&self) -> &str;

    async fn active_tab_url(&self) -> String;

    async fn active_tab_title(&self) -> String;

    async fn close_active_tab(&self);

    async fn open_new_tab(&self);

    async fn quit_app(&self);
}
