//! Store Action Dispatchers
//!
//! One async dispatcher per API call. Each follows the same protocol:
//! mark the store `Loading`, await the request, then either reduce the
//! payload into state and return to `Idle`, or log the error and mark the
//! store `Failed`. Errors keep no detail in state and nothing is rolled
//! back; a later successful action clears the flag.

use leptos::prelude::*;

use crate::api;
use crate::models::{Todo, TodoId};
use crate::store::{
    store_append_todo, store_remove_todo, store_replace_todo, store_replace_todos,
    store_toggle_editable, AppStateStoreFields, AppStore, Status,
};

fn reject(store: &AppStore, action: &str, err: String) {
    web_sys::console::error_1(&format!("[STORE] {} failed: {}", action, err).into());
    store.status().set(Status::Failed);
}

/// Replace the whole list with the server's collection.
pub async fn load_todos(store: AppStore) {
    store.status().set(Status::Loading);
    match api::get_all_todos().await {
        Ok(todos) => {
            store.status().set(Status::Idle);
            store_replace_todos(&store, todos);
        }
        Err(err) => reject(&store, "load", err),
    }
}

/// Persist a new todo and append the server-assigned copy.
pub async fn add_todo(store: AppStore, todo: Todo) {
    store.status().set(Status::Loading);
    match api::save_todo(&todo).await {
        Ok(saved) => {
            store.status().set(Status::Idle);
            store_append_todo(&store, saved);
        }
        Err(err) => reject(&store, "add", err),
    }
}

/// Fetch a single todo into the focused slot.
pub async fn fetch_todo(store: AppStore, id: TodoId) {
    store.status().set(Status::Loading);
    match api::get_todo(&id).await {
        Ok(todo) => {
            store.status().set(Status::Idle);
            store.focused_todo().set(Some(todo));
        }
        Err(err) => reject(&store, "fetch", err),
    }
}

/// Persist an edited todo and replace the matching list entry.
pub async fn update_todo(store: AppStore, todo: Todo) {
    store.status().set(Status::Loading);
    match api::update_todo(&todo).await {
        Ok(updated) => {
            store.status().set(Status::Idle);
            store_replace_todo(&store, updated);
        }
        Err(err) => reject(&store, "update", err),
    }
}

/// Delete a todo and drop it from the list.
pub async fn remove_todo(store: AppStore, id: TodoId) {
    store.status().set(Status::Loading);
    match api::delete_todo(&id).await {
        Ok(()) => {
            store.status().set(Status::Idle);
            store_remove_todo(&store, &id);
        }
        Err(err) => reject(&store, "delete", err),
    }
}

/// Flip a todo's edit-mode flag. Local only, no network traffic.
pub fn toggle_editable(store: &AppStore, id: &TodoId) {
    store_toggle_editable(store, id);
}
