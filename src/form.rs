//! Item form model
//!
//! Maps each category to the fields its modal shows, holds the raw text the
//! user typed, and turns it into typed item details on submit.

use crate::entities::{Assessment, Category, ClassMeeting, Coursework, Item, ItemDetails, Material, Status};
use crate::utils::datetime::{self, format_hm, format_ymd, parse_weekday, weekday_name, WEEKDAYS};
use chrono::Weekday;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Errors detected while reading a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid day '{0}'")]
    InvalidDay(String),
}

/// One input of the item modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Title,
    Course,
    Deadline,
    Day,
    Time,
    Semester,
    File,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Title => "Title",
            FieldKind::Course => "Course",
            FieldKind::Deadline => "Deadline",
            FieldKind::Day => "Day of Week",
            FieldKind::Time => "Time",
            FieldKind::Semester => "Semester",
            FieldKind::File => "Upload File (PDF, DOCX, etc.)",
        }
    }

    /// Format hint shown next to empty inputs
    pub fn hint(self) -> Option<&'static str> {
        match self {
            FieldKind::Deadline => Some("YYYY-MM-DD"),
            FieldKind::Time => Some("HH:MM"),
            FieldKind::Day => Some("←/→ to change"),
            FieldKind::File => Some("path to file"),
            _ => None,
        }
    }

    /// Fields picked from a fixed set rather than typed
    pub fn is_choice(self) -> bool {
        matches!(self, FieldKind::Day)
    }
}

/// Fields shown by the modal for `category`.
pub fn fields_for(category: Category) -> &'static [FieldKind] {
    match category {
        Category::Projects | Category::Assignments | Category::Cts => {
            &[FieldKind::Title, FieldKind::Course, FieldKind::Deadline]
        }
        Category::Classes => &[FieldKind::Title, FieldKind::Day, FieldKind::Time],
        Category::Books => &[FieldKind::Title, FieldKind::Semester, FieldKind::File],
    }
}

/// Title of the item modal ("Add Project", "Edit Book or Lecture")
pub fn modal_title(category: Category, editing: bool) -> String {
    let verb = if editing { "Edit" } else { "Add" };
    format!("{} {}", verb, category.singular())
}

/// Label of the modal submit control
pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Update"
    } else {
        "Add"
    }
}

/// Raw text of every field, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    values: BTreeMap<FieldKind, String>,
}

impl FormValues {
    /// Blank form for adding to `category`
    pub fn blank(category: Category) -> Self {
        let mut values = Self::default();
        for field in fields_for(category) {
            values.set(*field, "");
        }
        if category == Category::Classes {
            values.set(FieldKind::Day, weekday_name(Weekday::Mon));
        }
        values
    }

    /// Form pre-filled from an existing item
    pub fn from_item(item: &Item) -> Self {
        let mut values = Self::blank(item.category());
        values.set(FieldKind::Title, item.title.clone());
        if let Some(course) = item.course() {
            values.set(FieldKind::Course, course);
        }
        if let Some(deadline) = item.deadline() {
            values.set(FieldKind::Deadline, format_ymd(deadline));
        }
        if let Some(meeting) = item.schedule() {
            values.set(FieldKind::Day, weekday_name(meeting.day));
            values.set(FieldKind::Time, format_hm(meeting.time));
        }
        if let Some(semester) = item.semester() {
            values.set(FieldKind::Semester, semester);
        }
        values
    }

    pub fn get(&self, field: FieldKind) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldKind, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn value_mut(&mut self, field: FieldKind) -> &mut String {
        self.values.entry(field).or_default()
    }

    /// Move the day selection forward or backward through the week
    pub fn cycle_day(&mut self, forward: bool) {
        let current = parse_weekday(self.get(FieldKind::Day)).unwrap_or(Weekday::Mon);
        let index = WEEKDAYS.iter().position(|d| *d == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % WEEKDAYS.len()
        } else {
            (index + WEEKDAYS.len() - 1) % WEEKDAYS.len()
        };
        self.set(FieldKind::Day, weekday_name(WEEKDAYS[next]));
    }

    /// File to upload, if the file field has content
    pub fn file_path(&self) -> Option<PathBuf> {
        let raw = self.get(FieldKind::File).trim();
        if raw.is_empty() {
            None
        } else {
            Some(PathBuf::from(raw))
        }
    }

    fn optional_text(&self, field: FieldKind) -> Option<String> {
        let raw = self.get(field).trim();
        if raw.is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    }

    fn optional_date(&self) -> Result<Option<chrono::NaiveDate>, FormError> {
        match self.optional_text(FieldKind::Deadline) {
            Some(raw) => datetime::parse_date(&raw)
                .map(Some)
                .map_err(|_| FormError::InvalidDate(raw)),
            None => Ok(None),
        }
    }
}

/// Typed content of a submitted form, before id and timestamps are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    /// Details as submitted: status starts pending, no attachment yet
    pub details: ItemDetails,
}

impl ItemDraft {
    /// Read the fields relevant to `category`
    pub fn parse(category: Category, values: &FormValues) -> Result<Self, FormError> {
        let title = values
            .optional_text(FieldKind::Title)
            .ok_or(FormError::MissingField(FieldKind::Title.label()))?;

        let details = match category {
            Category::Projects | Category::Assignments => {
                let work = Coursework {
                    course: values.optional_text(FieldKind::Course),
                    deadline: values.optional_date()?,
                    status: Status::Pending,
                };
                if category == Category::Projects {
                    ItemDetails::Project(work)
                } else {
                    ItemDetails::Assignment(work)
                }
            }
            Category::Cts => ItemDetails::Ct(Assessment {
                course: values.optional_text(FieldKind::Course),
                deadline: values.optional_date()?,
            }),
            Category::Classes => {
                let raw_day = values.get(FieldKind::Day);
                let day = if raw_day.trim().is_empty() {
                    Weekday::Mon
                } else {
                    parse_weekday(raw_day).ok_or_else(|| FormError::InvalidDay(raw_day.to_string()))?
                };
                let raw_time = values
                    .optional_text(FieldKind::Time)
                    .ok_or(FormError::MissingField(FieldKind::Time.label()))?;
                let time = datetime::parse_time(&raw_time).map_err(|_| FormError::InvalidTime(raw_time))?;
                ItemDetails::Class(ClassMeeting { day, time })
            }
            Category::Books => ItemDetails::Book(Material {
                semester: values.optional_text(FieldKind::Semester),
                attachment: None,
            }),
        };

        Ok(Self { title, details })
    }
}
