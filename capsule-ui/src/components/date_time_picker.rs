//! Unlock date and time picker
//!
//! Month calendar on the left, slot column on the right. Past days and, until
//! a day is picked, every slot button are disabled.

use capsule::{DayCell, MonthView, TimeSlot};
use chrono::NaiveDate;
use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn DateTimePicker(today: NaiveDate) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dialog = state.dialog;

    let month = create_rw_signal(
        dialog
            .with_untracked(|d| d.draft().date())
            .map(MonthView::containing)
            .unwrap_or_else(|| MonthView::containing(today)),
    );

    let selected_date = create_memo(move |_| dialog.with(|d| d.draft().date()));

    let pick_date = move |date: NaiveDate| {
        dialog.update(|d| {
            if let Err(e) = d.select_date(date, today) {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    };

    view! {
        <div class="mt-2 rounded-lg border border-primary-400/20 bg-gray-900/50">
            <div class="flex max-sm:flex-col">
                // Calendar
                <div class="p-2 sm:pe-5">
                    <div class="flex items-center justify-between mb-2">
                        <button
                            type="button"
                            class="px-2 py-1 rounded hover:bg-gray-700 disabled:opacity-30"
                            disabled=move || !month.get().can_go_back(today)
                            on:click=move |_| month.update(|m| *m = m.prev())
                        >
                            "‹"
                        </button>
                        <span class="text-sm font-medium">{move || month.get().title()}</span>
                        <button
                            type="button"
                            class="px-2 py-1 rounded hover:bg-gray-700"
                            on:click=move |_| month.update(|m| *m = m.next())
                        >
                            "›"
                        </button>
                    </div>

                    <div class="grid grid-cols-7 gap-1 text-center text-xs text-gray-500 mb-1">
                        {["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
                            .into_iter()
                            .map(|d| view! { <span>{d}</span> })
                            .collect_view()}
                    </div>

                    <div class="grid grid-cols-7 gap-1">
                        {move || {
                            month.get()
                                .weeks(today, selected_date.get())
                                .into_iter()
                                .flatten()
                                .map(|cell| match cell {
                                    None => view! { <span class="w-9 h-9" /> }.into_view(),
                                    Some(cell) => {
                                        view! {
                                            <button
                                                type="button"
                                                class=day_class(&cell)
                                                disabled=!cell.selectable
                                                on:click=move |_| pick_date(cell.date)
                                            >
                                                {cell.date.format("%-d").to_string()}
                                            </button>
                                        }
                                        .into_view()
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                // Slot column
                <div class="relative w-full max-sm:h-48 sm:w-40">
                    <div class="absolute inset-0 border-primary-400/20 py-4 max-sm:border-t sm:border-l overflow-y-auto">
                        <div class="space-y-3">
                            <div class="flex h-5 shrink-0 items-center px-5">
                                <p class="text-sm font-medium">
                                    {move || dialog.with(|d| d.slot_header())}
                                </p>
                            </div>
                            <div class="grid gap-1.5 px-5 max-sm:grid-cols-2">
                                {dialog
                                    .with_untracked(|d| d.schedule().slots().to_vec())
                                    .into_iter()
                                    .map(|slot| view! { <SlotButton time=slot /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SlotButton(time: TimeSlot) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dialog = state.dialog;

    let chosen = move || dialog.with(|d| d.draft().time_slot() == Some(time));

    view! {
        <button
            type="button"
            disabled=move || !dialog.with(|d| d.slots_enabled())
            on:click=move |_| {
                dialog.update(|d| {
                    if let Err(e) = d.select_time_slot(time) {
                        web_sys::console::warn_1(&e.to_string().into());
                    }
                });
            }
            class=move || slot_class(chosen())
        >
            {time.to_string()}
        </button>
    }
}

fn day_class(cell: &DayCell) -> &'static str {
    if cell.selected {
        "w-9 h-9 rounded-md bg-primary-600 text-white"
    } else if cell.today {
        "w-9 h-9 rounded-md border border-primary-400/60 hover:bg-gray-700"
    } else {
        "w-9 h-9 rounded-md hover:bg-gray-700 disabled:opacity-30 disabled:hover:bg-transparent"
    }
}

fn slot_class(chosen: bool) -> String {
    let base = "w-full rounded-md px-3 py-1 text-sm transition-colors disabled:opacity-40 disabled:cursor-not-allowed";
    if chosen {
        format!("{} bg-primary-600 text-white", base)
    } else {
        format!("{} border border-gray-600 hover:bg-gray-700", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_class_marks_selected_and_today() {
        let today = date(2026, 10, 14);
        let month = MonthView::containing(today);
        let cells: Vec<DayCell> = month
            .weeks(today, Some(date(2026, 10, 20)))
            .into_iter()
            .flatten()
            .flatten()
            .collect();

        let class_of = |day: NaiveDate| {
            let cell = cells.iter().find(|c| c.date == day).unwrap();
            day_class(cell)
        };
        assert!(class_of(date(2026, 10, 20)).contains("bg-primary-600"));
        assert!(class_of(today).contains("border-primary-400/60"));
        assert!(class_of(date(2026, 10, 1)).contains("disabled:opacity-30"));
    }

    #[test]
    fn test_slot_class_highlights_chosen_time() {
        let schedule = capsule::SlotSchedule::standard();
        let chosen: TimeSlot = "10:00".parse().unwrap();
        let classes: Vec<String> = schedule
            .slots()
            .iter()
            .map(|&time| slot_class(time == chosen))
            .collect();

        assert_eq!(classes.len(), 18);
        assert_eq!(
            classes.iter().filter(|c| c.contains("bg-primary-600")).count(),
            1
        );
        assert!(classes[2].contains("bg-primary-600"));
    }
}
