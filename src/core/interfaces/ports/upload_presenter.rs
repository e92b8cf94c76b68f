use crate::core::models::UploadPhase;

/// The UI surface the controller drives. The original frontend toggled
/// status/error/result panels and a submit button; any binding (console,
/// GUI, test recorder) implements this instead of reaching into the
/// controller.
pub trait UploadPresenter: Send + Sync {
    /// Renders the current phase. Exactly one panel per phase.
    fn render_phase(&self, phase: &UploadPhase);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// A one-off notice outside the panel lifecycle (the original used a
    /// blocking alert for these).
    fn notify(&self, message: &str);
}
