//! Edit Todo Component
//!
//! Edit-mode row: a draft title input with Save on click or Enter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::models::Todo;
use crate::store::use_app_store;

/// Inline editor for one todo. The draft is local until Save; saving with
/// an empty draft is a no-op, and a successful save clears the edit flag.
#[component]
pub fn EditTodo(todo: Todo) -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(todo.title.clone());

    let save = move || {
        let title = draft.get();
        if title.is_empty() {
            return;
        }
        let mut updated = todo.clone();
        updated.title = title;
        updated.is_editable = false;
        spawn_local(actions::update_todo(store, updated));
    };
    let save_on_click = save.clone();

    view! {
        <div class="edit-box">
            <input
                type="text"
                class="edit-input"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        save();
                    }
                }
            />
            <button class="save-btn" on:click=move |_| save_on_click()>
                "Save"
            </button>
        </div>
    }
}
