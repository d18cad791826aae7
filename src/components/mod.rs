//! UI Components
//!
//! Leptos components for the todo widget.

mod todo_header;
mod todo_form;
mod todo_row;
mod todo_list;
mod load_error;

pub use todo_header::TodoHeader;
pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
pub use todo_list::TodoList;
pub use load_error::LoadError;
