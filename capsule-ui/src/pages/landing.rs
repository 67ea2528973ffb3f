//! Landing Page
//!
//! Static entry view: navigation bar and hero banner.

use leptos::*;

use crate::components::{HeroSection, Navbar};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen w-full overflow-hidden relative">
            <Navbar />
            <HeroSection />
        </div>
    }
}
