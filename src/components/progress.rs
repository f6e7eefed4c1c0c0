//! Progress Header Component
//!
//! Completion percentage bar above the list.

use leptos::prelude::*;

use crate::filter::progress_percent;
use crate::store::{use_app_store, AppStateStoreFields};

/// Progress bar driven by the store's completed/total counts.
///
/// The percentage is exposed to CSS as `--value`, formatted to two
/// decimals. An empty list renders "NaN%" on purpose.
#[component]
pub fn Progress() -> impl IntoView {
    let store = use_app_store();

    let total = Memo::new(move |_| store.todos().get().len());
    let completed = Memo::new(move |_| {
        store.todos().get().iter().filter(|t| t.completed).count()
    });
    let percent = move || format!("{:.2}%", progress_percent(completed.get(), total.get()));

    view! {
        <div class="progress-container">
            <h1 class="progress-title">"Progress"</h1>
            <div class="progress-bar" style=("--value", percent)></div>
            <span class="progress-completed">
                {move || format!("{} completed", completed.get())}
            </span>
        </div>
    }
}
