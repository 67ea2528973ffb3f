//! Global Application State
//!
//! Reactive state management using Leptos signals.

use capsule::{
    CapsuleStore, CreationDialog, DialogError, DialogResult, Notice, NoticeKind, NoticeSink,
    NoticeTiming,
};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Capsules created during this page session
    pub capsules: RwSignal<CapsuleStore>,
    /// Creation dialog; its open flag is toggled by the home view
    pub dialog: RwSignal<CreationDialog>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Toast auto-dismiss delays
    pub timing: NoticeTiming,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let config = capsule::Config::default();

    let mut store = CapsuleStore::new();
    store.subscribe(|list| {
        web_sys::console::log_1(&format!("{} capsule(s) in this session", list.len()).into());
    });

    let state = GlobalState {
        capsules: create_rw_signal(store),
        dialog: create_rw_signal(CreationDialog::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        timing: config.notices.timing(),
    };

    provide_context(state);
}

impl GlobalState {
    /// "Create Capsule" and "Create Your First Capsule"
    pub fn open_dialog(&self) {
        self.dialog.update(|d| d.open());
    }

    pub fn close_dialog(&self) {
        self.dialog.update(|d| d.close());
    }

    /// Submit the dialog and append the capsule on success
    pub fn submit_dialog(&self) {
        let store = self.capsules;
        let mut result = Ok(());
        self.dialog.update(|dialog| {
            result = dialog.submit(self, |capsule| store.update(|s| s.append(capsule)));
        });

        if let Some(e) = unreported(result) {
            web_sys::console::warn_1(&e.to_string().into());
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(millis(self.timing.success), move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(millis(self.timing.error), move || {
            error_signal.set(None);
        })
        .forget();
    }
}

impl NoticeSink for GlobalState {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => self.show_success(&notice.message),
            NoticeKind::Error => self.show_error(&notice.message),
        }
    }
}

/// Submit errors the user has not already seen as a toast
fn unreported(result: DialogResult<()>) -> Option<DialogError> {
    match result {
        Ok(()) | Err(DialogError::Validation(_)) => None,
        Err(e) => Some(e),
    }
}

fn millis(d: std::time::Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule::{DraftField, ValidationError};
    use std::time::Duration;

    #[test]
    fn test_only_unreported_submit_errors_surface() {
        let validation = DialogError::Validation(ValidationError {
            missing: vec![DraftField::Title],
        });
        assert_eq!(unreported(Err(validation)), None);
        assert_eq!(unreported(Ok(())), None);
        assert_eq!(unreported(Err(DialogError::Closed)), Some(DialogError::Closed));
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(3000)), 3000);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
