//! Navigation Component
//!
//! Header bar with the brand and the wallet button.

use leptos::*;
use leptos_router::*;

use super::star_button::StarButton;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="w-full py-4 px-6 md:px-12 flex justify-between items-center z-20 relative">
            <A href="/" class="text-gradient text-xl md:text-2xl font-bold">
                "Time Capsule"
            </A>

            // Decorative: there is no wallet integration
            <StarButton class="text-sm md:text-base">"Connect Wallet"</StarButton>
        </nav>
    }
}
