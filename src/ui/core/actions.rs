use crate::attachment::AttachmentResult;
use crate::entities::{Attachment, Category, ItemId, View};
use crate::form::FormValues;

/// Results of background work are carried by value, so actions are not `Clone`.
#[derive(Debug)]
pub enum Action {
    // Navigation
    Navigate(View),
    NextItem,
    PreviousItem,

    // Item operations
    OpenAdd(Category),
    OpenEdit {
        category: Category,
        id: ItemId,
    },
    SubmitForm(FormValues),
    AttachmentEncoded {
        generation: u64,
        values: FormValues,
        result: AttachmentResult<Attachment>,
    },
    ConfirmDelete {
        category: Category,
        id: ItemId,
    },
    DeleteItem {
        category: Category,
        id: ItemId,
    },
    ToggleStatus {
        category: Category,
        id: ItemId,
    },
    SaveAttachment {
        category: Category,
        id: ItemId,
    },

    // Form feedback
    FormAlert(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    ItemForm {
        category: Category,
        /// Id of the item being edited, `None` when adding
        editing: Option<ItemId>,
        values: FormValues,
        /// Name of the file already attached to the item being edited
        current_attachment: Option<String>,
    },
    DeleteConfirmation {
        category: Category,
        id: ItemId,
        title: String,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}
