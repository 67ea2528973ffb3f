//! Capsule Card Component
//!
//! Summary card for one capsule: title and the unlock string as created.

use capsule::CardView;
use leptos::*;

#[component]
pub fn CapsuleCard(card: CardView) -> impl IntoView {
    let caption = card.caption();

    view! {
        <div class="rounded-lg overflow-hidden glass-morphism animate-pulse-glow">
            <div class="p-4 relative">
                <div class="absolute inset-0 bg-gradient-to-r from-primary-500/10 to-purple-500/10 opacity-30 rounded-lg" />
                <h3 class="text-lg font-medium mb-1 relative z-10">{card.title}</h3>
                <p class="text-sm text-gray-400 relative z-10">{caption}</p>
            </div>
        </div>
    }
}
