//! Home Page
//!
//! The capsule list and the creation workflow.

use capsule::ListView;
use leptos::*;

use crate::components::{BackgroundBeams, CapsuleCard, CapsuleForm, Navbar, StarButton};
use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let capsules = state.capsules;

    let list = create_memo(move |_| capsules.with(|s| ListView::project(s.capsules())));

    let state_for_header = state.clone();
    let state_for_list = state.clone();

    view! {
        <div class="min-h-screen w-full overflow-hidden relative">
            <Navbar />

            <div class="container mx-auto px-4 py-12 relative z-10">
                <div class="max-w-4xl mx-auto">
                    <div class="flex justify-between items-center mb-12">
                        <h1 class="text-3xl font-bold text-gradient">"My Time Capsules"</h1>
                        <StarButton on_click=move |_| state_for_header.open_dialog()>
                            "Create Capsule"
                        </StarButton>
                    </div>

                    {move || match list.get() {
                        ListView::Cards(cards) => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {cards.into_iter()
                                    .map(|card| view! { <CapsuleCard card=card /> })
                                    .collect_view()}
                            </div>
                        }.into_view(),
                        ListView::Empty { prompt, action } => {
                            let state = state_for_list.clone();
                            view! {
                                <div class="text-center py-20 glass-morphism rounded-lg">
                                    <p class="text-gray-400 mb-6">{prompt}</p>
                                    <StarButton on_click=move |_| state.open_dialog()>
                                        {action}
                                    </StarButton>
                                </div>
                            }.into_view()
                        }
                    }}
                </div>
            </div>

            <CapsuleForm />

            <BackgroundBeams />
        </div>
    }
}
