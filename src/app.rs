//! Todo Frontend App
//!
//! Root component: mounts the store, loads the list, owns the UI-local
//! filter selection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{AddTodoInput, FilterSelect, Progress, TodoList};
use crate::filter::TodoFilter;
use crate::store::{AppState, AppStateStoreFields, Status};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // UI-local filter selection, never persisted
    let (filter, set_filter) = signal(TodoFilter::default());

    // Load the list on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] Loading todo list".into());
        spawn_local(actions::load_todos(store));
    });

    let cursor = move || {
        if store.status().get() == Status::Loading { "wait" } else { "default" }
    };

    view! {
        <div class="container" style=("--cursor", cursor)>
            <div class="inner-container">
                <Progress/>

                <section class="header">
                    <h2 class="title">"Tasks"</h2>
                    <FilterSelect selected=filter set_selected=set_filter/>
                </section>

                <TodoList filter=filter/>

                <AddTodoInput/>
            </div>
        </div>
    }
}
