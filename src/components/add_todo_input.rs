//! Add Todo Input Component
//!
//! Text box below the list; Enter submits a new todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::models::Todo;
use crate::store::use_app_store;

/// Creation input. Enter on a non-empty value dispatches the save and
/// clears the box immediately; Enter on an empty value does nothing.
#[component]
pub fn AddTodoInput() -> impl IntoView {
    let store = use_app_store();
    let (value, set_value) = signal(String::new());

    let on_submit = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let title = value.get();
        if title.is_empty() {
            return;
        }
        spawn_local(actions::add_todo(store, Todo::draft(title)));
        set_value.set(String::new());
    };

    view! {
        <input
            type="text"
            class="add-input"
            placeholder="Add your todo..."
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            on:keydown=on_submit
        />
    }
}
