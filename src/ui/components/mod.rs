//! Reusable UI components

pub mod dashboard_component;
pub mod dialog_component;
pub mod dialogs;
pub mod item_list_component;
pub mod sidebar_component;

// Component exports
pub use dashboard_component::DashboardComponent;
pub use dialog_component::DialogComponent;
pub use item_list_component::ItemListComponent;
pub use sidebar_component::SidebarComponent;
