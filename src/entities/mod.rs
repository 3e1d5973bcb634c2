//! Planner data model: categories, items and the application state container.

pub mod category;
pub mod item;
pub mod state;

pub use category::Category;
pub use item::{Assessment, Attachment, ClassMeeting, Coursework, Item, ItemDetails, ItemId, Material, Status};
pub use state::{AppState, Collections, View};
