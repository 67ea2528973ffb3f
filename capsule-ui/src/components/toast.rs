//! Toast Notification Component
//!
//! Shows the dialog's success and error notices.

use capsule::NoticeKind;
use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            // Success toast
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg kind=NoticeKind::Success />
                })
            }}

            // Error toast
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg kind=NoticeKind::Error />
                })
            }}
        </div>
    }
}

fn toast_style(kind: NoticeKind) -> (&'static str, &'static str) {
    match kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    kind: NoticeKind,
) -> impl IntoView {
    let (icon, bg_class) = toast_style(kind);

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_style() {
        assert_eq!(toast_style(NoticeKind::Success), ("✓", "bg-green-600"));
        assert_eq!(toast_style(NoticeKind::Error), ("✕", "bg-red-600"));
    }
}
