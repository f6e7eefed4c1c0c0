//! Todo List Component
//!
//! Renders the filtered list, swapping each row between display mode and
//! edit mode on the todo's edit flag.

use leptos::prelude::*;

use crate::filter::TodoFilter;
use crate::store::{use_app_store, AppStateStoreFields};

use super::{EditTodo, TodoItem};

#[component]
pub fn TodoList(filter: ReadSignal<TodoFilter>) -> impl IntoView {
    let store = use_app_store();
    let visible = Memo::new(move |_| filter.get().apply(&store.todos().get()));

    view! {
        <div class="todo-list">
            <For
                each=move || visible.get()
                key=|todo| todo.clone()
                children=move |todo| {
                    if todo.is_editable {
                        view! { <EditTodo todo=todo/> }.into_any()
                    } else {
                        view! { <TodoItem todo=todo/> }.into_any()
                    }
                }
            />
        </div>
    }
}
