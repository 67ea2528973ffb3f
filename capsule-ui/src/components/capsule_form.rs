//! Capsule Form Component
//!
//! Modal dialog for writing a capsule. Field edits go straight into the
//! shared `CreationDialog`; visibility follows its open state.

use leptos::*;

use super::date_time_picker::DateTimePicker;
use crate::state::global::GlobalState;

#[component]
pub fn CapsuleForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dialog = state.dialog;

    let is_open = create_memo(move |_| dialog.with(|d| d.is_open()));

    let state_for_close = state.clone();
    let close = move |_: web_sys::MouseEvent| state_for_close.close_dialog();

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state_for_submit.submit_dialog();
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center">
                // Backdrop
                <div class="absolute inset-0 bg-black/70" on:click=close.clone() />

                <div class="relative z-50 w-full sm:max-w-[550px] rounded-xl bg-gray-900/95 backdrop-blur-lg border border-primary-400/20 p-6 shadow-xl">
                    <button
                        type="button"
                        class="absolute right-4 top-4 text-gray-400 hover:text-white"
                        aria-label="Close"
                        on:click=close.clone()
                    >
                        "×"
                    </button>

                    <div class="mb-4">
                        <h2 class="text-gradient-primary text-xl font-semibold">"Create Time Capsule"</h2>
                        <p class="text-sm text-gray-400 mt-1">
                            "Store a message that will be unlocked at your chosen time in the future."
                        </p>
                    </div>

                    <form on:submit=on_submit.clone() class="space-y-4">
                        <div>
                            <label for="title" class="text-sm font-medium text-gray-300">"Title"</label>
                            <input
                                id="title"
                                type="text"
                                placeholder="Give your time capsule a name"
                                prop:value=move || dialog.with(|d| d.draft().title().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dialog.update(|d| {
                                        let _ = d.set_title(value);
                                    });
                                }
                                class="w-full mt-1 bg-gray-900/50 rounded-lg px-4 py-2 text-white
                                       border border-primary-400/20 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label for="message" class="text-sm font-medium text-gray-300">"Message"</label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="Write your message for the future"
                                prop:value=move || dialog.with(|d| d.draft().message().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dialog.update(|d| {
                                        let _ = d.set_message(value);
                                    });
                                }
                                class="w-full mt-1 bg-gray-900/50 rounded-lg px-4 py-2 text-white
                                       border border-primary-400/20 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="text-sm font-medium text-gray-300">"Unlock Date & Time"</label>
                            <DateTimePicker today=chrono::Local::now().date_naive() />
                        </div>

                        <div class="flex justify-end">
                            <button
                                type="submit"
                                class="w-full sm:w-auto px-6 py-2 rounded-lg font-semibold
                                       bg-gradient-to-r from-primary-500/90 to-purple-500/90
                                       hover:from-primary-500 hover:to-purple-500 transition-colors"
                            >
                                "Proceed"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
