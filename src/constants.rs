//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Storage
/// Key under which the whole planner state is stored
pub const STORAGE_KEY: &str = "academicPlannerState";
/// Current snapshot schema version
pub const SNAPSHOT_VERSION: u32 = 1;
/// Directory name used under the platform config/data dirs
pub const APP_DIR_NAME: &str = "academic-planner";
/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "academic-planner.toml";

// Attachments
/// Default attachment size limit (5 MiB)
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;
/// Upper bound accepted for a configured attachment limit (50 MiB)
pub const MAX_CONFIGURABLE_ATTACHMENT_BYTES: u64 = 50 * 1024 * 1024;
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

// Dashboard
/// Number of entries shown in the upcoming deadlines card
pub const UPCOMING_LIMIT: usize = 5;

// Logging
/// Entries kept in the in-memory buffer behind the logs dialog
pub const MAX_LOG_ENTRIES: usize = 1000;

// UI Section Headers
pub const HEADER_DASHBOARD: &str = "Dashboard";
pub const HEADER_UPCOMING: &str = "Upcoming Deadlines";
pub const HEADER_QUICK_ACTIONS: &str = "Quick Actions";
pub const HEADER_PENDING_PROJECTS: &str = "Pending Projects";
pub const HEADER_PENDING_ASSIGNMENTS: &str = "Pending Assignments";

// Empty states
pub const EMPTY_UPCOMING: &str = "No upcoming deadlines.";
pub const EMPTY_PENDING_PROJECTS: &str = "No pending projects. Great job!";
pub const EMPTY_PENDING_ASSIGNMENTS: &str = "No pending assignments. All clear!";

// Success Messages
pub const SUCCESS_ITEM_ADDED: &str = "✅ Item added";
pub const SUCCESS_ITEM_UPDATED: &str = "✅ Item updated";
pub const SUCCESS_ITEM_DELETED: &str = "✅ Item deleted";
pub const SUCCESS_STATUS_TOGGLED: &str = "✅ Status updated";
pub const SUCCESS_ATTACHMENT_SAVED: &str = "✅ Attachment saved to";

// Error Messages
pub const ERROR_SAVE_FAILED: &str = "❌ Failed to save planner state";
pub const ERROR_ATTACHMENT_TOO_LARGE: &str = "File is too large. Please upload files smaller than";
pub const ERROR_ATTACHMENT_READ_FAILED: &str = "❌ Failed to read attachment";
pub const ERROR_ATTACHMENT_SAVE_FAILED: &str = "❌ Failed to save attachment";
pub const ERROR_NO_ATTACHMENT: &str = "This item has no attachment";

// Confirmation
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const ENCODING_IN_PROGRESS: &str = "⟳ Encoding attachment...";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 26;
