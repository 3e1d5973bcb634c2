//! Academic Planner - A terminal planner for students
//!
//! Tracks projects, assignments, weekly classes, books & lectures and class
//! tests (CTs) in a single locally persisted state, with a dashboard of
//! upcoming deadlines and pending work.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Items, categories and the planner state
//! * [`storage`] - Key-value persistence of the planner state
//! * [`planner`] - Action handlers mutating and persisting the state
//! * [`form`] - Item form fields and parsing of submitted values
//! * [`attachment`] - File attachments encoded as data URLs
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Utility functions and helpers

/// Attachment size checks, encoding and saving
pub mod attachment;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Planner data model
pub mod entities;

/// Item form description and validation
pub mod form;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Operations on the planner state
pub mod planner;

/// Local storage layer for the planner state
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use entities::{AppState, Category, Collections, Item, ItemDetails, ItemId, Status, View};
pub use planner::{Planner, PlannerError, PlannerSettings};
