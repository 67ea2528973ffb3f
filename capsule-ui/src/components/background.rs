//! Decorative background beams

use leptos::*;

#[component]
pub fn BackgroundBeams() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 z-0 overflow-hidden" aria-hidden="true">
            {(0..6).map(|i| view! {
                <div
                    class="beam absolute top-0 h-full w-px bg-gradient-to-b from-transparent via-primary-400/30 to-transparent"
                    style=format!("left: {}%; animation-delay: {}s", 10 + i * 16, i)
                />
            }).collect_view()}
        </div>
    }
}
