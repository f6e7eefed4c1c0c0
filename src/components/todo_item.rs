//! Todo Item Component
//!
//! Display-mode row: completion toggle, title, edit/delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::models::Todo;
use crate::store::use_app_store;

/// One display-mode row. Rows only exist for persisted todos, so `id` is
/// always present by the time the handlers run.
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let toggle_complete = {
        let todo = todo.clone();
        move |_| {
            let mut flipped = todo.clone();
            flipped.completed = !flipped.completed;
            spawn_local(actions::update_todo(store, flipped));
        }
    };

    let start_edit = {
        let id = todo.id.clone();
        move |_| {
            if let Some(id) = &id {
                actions::toggle_editable(&store, id);
            }
        }
    };

    let delete = {
        let id = todo.id.clone();
        move |_| {
            if let Some(id) = id.clone() {
                spawn_local(actions::remove_todo(store, id));
            }
        }
    };

    let row_class = if todo.completed { "todo-item completed" } else { "todo-item" };
    let check_mark = if todo.completed { "☑" } else { "☐" };

    view! {
        <div class=row_class>
            <button class="check-btn" on:click=toggle_complete>
                {check_mark}
            </button>
            <div class="todo-text">{todo.title.clone()}</div>
            <button class="edit-btn" on:click=start_edit>
                "Edit"
            </button>
            <button class="delete-btn" on:click=delete>
                "Delete"
            </button>
        </div>
    }
}
