//! Filter Selector Component
//!
//! All / Done / Undone button row next to the list title.

use leptos::prelude::*;

use crate::filter::{TodoFilter, FILTERS};

/// Three-way filter selector. The selection lives in the parent as a plain
/// signal and is never persisted.
#[component]
pub fn FilterSelect(
    selected: ReadSignal<TodoFilter>,
    set_selected: WriteSignal<TodoFilter>,
) -> impl IntoView {
    view! {
        <div class="filter">
            {FILTERS
                .iter()
                .map(|&option| {
                    let is_selected = move || selected.get() == option;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() { "filter-btn active" } else { "filter-btn" }
                            }
                            on:click=move |_| set_selected.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
