use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five kinds of planner entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Projects,
    Assignments,
    Classes,
    Books,
    Cts,
}

impl Category {
    /// All categories in sidebar order
    pub const ALL: [Category; 5] = [
        Category::Projects,
        Category::Assignments,
        Category::Classes,
        Category::Books,
        Category::Cts,
    ];

    /// Storage key of the category ("projects", "books", ...)
    pub fn key(self) -> &'static str {
        match self {
            Category::Projects => "projects",
            Category::Assignments => "assignments",
            Category::Classes => "classes",
            Category::Books => "books",
            Category::Cts => "cts",
        }
    }

    /// Heading shown above the category list
    pub fn title(self) -> &'static str {
        match self {
            Category::Projects => "Projects",
            Category::Assignments => "Assignments",
            Category::Classes => "Classes",
            Category::Books => "Books & Lectures",
            Category::Cts => "Cts",
        }
    }

    /// Name of a single entry, used by modal titles
    pub fn singular(self) -> &'static str {
        match self {
            Category::Projects => "Project",
            Category::Assignments => "Assignment",
            Category::Classes => "Class",
            Category::Books => "Book or Lecture",
            Category::Cts => "Ct",
        }
    }

    /// Label of the add button in the category view
    pub fn add_label(self) -> String {
        match self {
            Category::Books => "Add Item".to_string(),
            other => format!("Add {}", other.singular()),
        }
    }

    /// Whether entries of this category carry a pending/done status
    pub fn has_status(self) -> bool {
        matches!(self, Category::Projects | Category::Assignments)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}
