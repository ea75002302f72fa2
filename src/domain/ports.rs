use crate::domain::model::Draft;

/// Settings the submission client needs from whoever configured it.
pub trait ConfigProvider: Send + Sync {
    /// Origin of the backend, e.g. `http://localhost:5000`.
    fn api_base(&self) -> &str;
}

/// Surface for user-visible outcome messages.
///
/// Every submission outcome, including transport failures, goes through
/// here; nothing is swallowed silently.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

impl<N: Notifier> Notifier for std::sync::Arc<N> {
    fn notify_success(&self, message: &str) {
        (**self).notify_success(message);
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message);
    }
}

/// Observer for draft mutations, decoupled from any rendering mechanism.
/// Called after each `set_field`, `toggle_diet_status` and `reset_draft`.
pub trait ChangeListener: Send + Sync {
    fn draft_changed(&self, draft: &Draft);
}
