//! Time Capsule front-end
//!
//! Landing and home views for composing time capsules, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. The creation
//! workflow itself lives in the `capsule` crate; this crate only holds it in
//! signals and renders it. There is no backend and nothing is persisted.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
