//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list
//! reductions are plain functions over `Vec<Todo>` so they stay testable
//! off-browser; the `store_*` wrappers apply them through the field lenses.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};

/// Outcome of the most recent async store operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, insertion order = display order before filtering
    pub todos: Vec<Todo>,
    /// Most recently fetched single todo
    pub focused_todo: Option<Todo>,
    /// Tri-state flag for the outstanding network operation
    pub status: Status,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// List Reductions
// ========================

/// Append a todo at the tail, keeping insertion order as display order.
pub fn append_todo(todos: &mut Vec<Todo>, todo: Todo) {
    todos.push(todo);
}

/// Replace the todo whose id matches `updated`, leaving the rest untouched.
pub fn replace_todo(todos: &mut Vec<Todo>, updated: Todo) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == updated.id) {
        *todo = updated;
    }
}

/// Remove the todo with the given id.
pub fn remove_todo(todos: &mut Vec<Todo>, id: &TodoId) {
    todos.retain(|t| t.id.as_ref() != Some(id));
}

/// Flip the edit-mode flag on the todo with the given id.
pub fn toggle_editable(todos: &mut Vec<Todo>, id: &TodoId) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id.as_ref() == Some(id)) {
        todo.is_editable = !todo.is_editable;
    }
}

// ========================
// Store Helper Functions
// ========================

/// Append a freshly persisted todo to the store
pub fn store_append_todo(store: &AppStore, todo: Todo) {
    append_todo(&mut store.todos().write(), todo);
}

/// Replace the whole list in the store
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Replace a todo in the store by ID
pub fn store_replace_todo(store: &AppStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: &TodoId) {
    remove_todo(&mut store.todos().write(), id);
}

/// Toggle a todo's edit-mode flag in the store by ID (local only)
pub fn store_toggle_editable(store: &AppStore, id: &TodoId) {
    toggle_editable(&mut store.todos().write(), id);
}
