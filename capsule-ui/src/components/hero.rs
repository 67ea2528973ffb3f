//! Landing page hero banner

use leptos::*;

use super::background::BackgroundBeams;
use super::star_button::StarLink;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-80px)] relative w-full flex items-center justify-center">
            <div class="text-center z-20 max-w-3xl px-6">
                <h1 class="text-3xl md:text-5xl lg:text-6xl font-bold mb-8 text-gradient">
                    "Create blockchain-powered time capsules."
                </h1>
                <p class="text-lg md:text-xl mb-12 text-gray-400">
                    "Store messages that unlock in the future — secure, tamper-proof, and truly timeless."
                </p>
                <StarLink href="/home" class="text-lg md:text-xl px-8 py-6">
                    "Connect Wallet"
                </StarLink>
            </div>
            <BackgroundBeams />
        </div>
    }
}
