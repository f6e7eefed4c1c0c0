//! UI Components
//!
//! Reusable Leptos components.

mod add_todo_input;
mod edit_todo;
mod filter_select;
mod progress;
mod todo_item;
mod todo_list;

pub use add_todo_input::AddTodoInput;
pub use edit_todo::EditTodo;
pub use filter_select::FilterSelect;
pub use progress::Progress;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
