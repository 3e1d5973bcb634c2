use super::category::Category;
use crate::utils::datetime::{time_serde, weekday_serde};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an item, unique within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion status of projects and assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Done,
}

impl Status {
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Done,
            Status::Done => Status::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Done => "done",
        }
    }
}

/// A file stored inline as a data URL. Name and payload always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileURL")]
    pub file_url: String,
}

/// Fields shared by projects and assignments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coursework {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: Status,
}

/// Fields of a class test
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Weekly recurrence of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMeeting {
    #[serde(with = "weekday_serde")]
    pub day: Weekday,
    #[serde(with = "time_serde")]
    pub time: NaiveTime,
}

/// Book or lecture material, optionally with an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(flatten)]
    pub attachment: Option<Attachment>,
}

/// Category-specific fields. Each variant carries only the fields legal for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemDetails {
    Project(Coursework),
    Assignment(Coursework),
    Class(ClassMeeting),
    Book(Material),
    Ct(Assessment),
}

impl ItemDetails {
    pub fn category(&self) -> Category {
        match self {
            ItemDetails::Project(_) => Category::Projects,
            ItemDetails::Assignment(_) => Category::Assignments,
            ItemDetails::Class(_) => Category::Classes,
            ItemDetails::Book(_) => Category::Books,
            ItemDetails::Ct(_) => Category::Cts,
        }
    }
}

/// One planner entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl Item {
    pub fn category(&self) -> Category {
        self.details.category()
    }

    pub fn course(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::Project(w) | ItemDetails::Assignment(w) => w.course.as_deref(),
            ItemDetails::Ct(a) => a.course.as_deref(),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        match &self.details {
            ItemDetails::Project(w) | ItemDetails::Assignment(w) => w.deadline,
            ItemDetails::Ct(a) => a.deadline,
            _ => None,
        }
    }

    /// Status is only present for projects and assignments
    pub fn status(&self) -> Option<Status> {
        match &self.details {
            ItemDetails::Project(w) | ItemDetails::Assignment(w) => Some(w.status),
            _ => None,
        }
    }

    pub fn schedule(&self) -> Option<&ClassMeeting> {
        match &self.details {
            ItemDetails::Class(meeting) => Some(meeting),
            _ => None,
        }
    }

    pub fn semester(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::Book(m) => m.semester.as_deref(),
            _ => None,
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match &self.details {
            ItemDetails::Book(m) => m.attachment.as_ref(),
            _ => None,
        }
    }

    /// Flip pending/done. Returns false for categories without a status.
    pub fn toggle_status(&mut self) -> bool {
        match &mut self.details {
            ItemDetails::Project(w) | ItemDetails::Assignment(w) => {
                w.status = w.status.toggled();
                true
            }
            _ => false,
        }
    }
}
