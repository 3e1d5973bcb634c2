//! Dialog rendering helpers

pub mod common;
mod item_form;
mod scroll_behavior;
mod system_dialogs;

pub use item_form::{render_item_form, FormState};
pub use scroll_behavior::DialogScroll;
pub use system_dialogs::{
    render_delete_confirmation_dialog, render_error_dialog, render_help_dialog, render_info_dialog,
    render_logs_dialog,
};
