//! Star-bordered call-to-action button

use leptos::*;
use leptos_router::*;

const STAR_CLASS: &str = "star-border relative inline-flex items-center justify-center \
     rounded-full border border-primary-400/40 bg-gray-900/80 px-5 py-2 font-medium \
     text-white hover:border-primary-300 transition-colors";

/// Button with the glowing star border
#[component]
pub fn StarButton(
    #[prop(optional, into)]
    on_click: Option<Callback<web_sys::MouseEvent>>,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("{} {}", STAR_CLASS, class)
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Same look, rendered as a router link
#[component]
pub fn StarLink(
    href: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href class=format!("{} {}", STAR_CLASS, class)>
            {children()}
        </A>
    }
}
