//! UI Components
//!
//! Reusable Leptos components.

pub mod auth_guard;
mod delete_confirm_button;
mod edit_task_modal;
mod field_error;
mod layout;
mod navbar;
pub mod task_item;

pub use auth_guard::AuthGuard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_task_modal::EditTaskModal;
pub use field_error::FieldError;
pub use layout::Layout;
pub use navbar::Navbar;
pub use task_item::TaskItem;
