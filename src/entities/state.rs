use super::category::Category;
use super::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// What the main area is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Category(Category),
}

impl View {
    /// Sidebar order: dashboard first, then every category
    pub fn all() -> Vec<View> {
        std::iter::once(View::Dashboard)
            .chain(Category::ALL.iter().copied().map(View::Category))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Category(category) => category.title(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Dashboard => f.write_str("dashboard"),
            View::Category(category) => f.write_str(category.key()),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("dashboard") {
            return Ok(View::Dashboard);
        }
        s.parse::<Category>().map(View::Category)
    }
}

/// Ordered item lists, one per category. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Collections {
    pub projects: Vec<Item>,
    pub assignments: Vec<Item>,
    pub classes: Vec<Item>,
    pub books: Vec<Item>,
    pub cts: Vec<Item>,
}

impl Collections {
    pub fn list(&self, category: Category) -> &[Item] {
        match category {
            Category::Projects => &self.projects,
            Category::Assignments => &self.assignments,
            Category::Classes => &self.classes,
            Category::Books => &self.books,
            Category::Cts => &self.cts,
        }
    }

    pub fn list_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Projects => &mut self.projects,
            Category::Assignments => &mut self.assignments,
            Category::Classes => &mut self.classes,
            Category::Books => &mut self.books,
            Category::Cts => &mut self.cts,
        }
    }

    /// Every item, category by category in sidebar order
    pub fn iter_all(&self) -> impl Iterator<Item = &Item> {
        Category::ALL.into_iter().flat_map(move |c| self.list(c).iter())
    }

    pub fn find(&self, category: Category, id: &ItemId) -> Option<&Item> {
        self.list(category).iter().find(|item| &item.id == id)
    }

    pub fn find_mut(&mut self, category: Category, id: &ItemId) -> Option<&mut Item> {
        self.list_mut(category).iter_mut().find(|item| &item.id == id)
    }

    pub fn contains(&self, category: Category, id: &ItemId) -> bool {
        self.find(category, id).is_some()
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.list(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every item sits in the list of its own category and that ids are unique per list
    pub fn validate(&self) -> Result<(), String> {
        for category in Category::ALL {
            let mut seen = HashSet::new();
            for item in self.list(category) {
                if item.category() != category {
                    return Err(format!(
                        "item {} of kind {} stored under {}",
                        item.id,
                        item.category(),
                        category
                    ));
                }
                if !seen.insert(&item.id) {
                    return Err(format!("duplicate id {} in {}", item.id, category));
                }
            }
        }
        Ok(())
    }
}

/// Planner state owned by the application root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub active_view: View,
    /// Item currently open in the edit form, if any
    pub editing_item: Option<Item>,
    pub items: Collections,
}

impl AppState {
    /// Fresh state showing `view`, with transient UI state cleared
    pub fn with_items(items: Collections, view: View) -> Self {
        Self {
            active_view: view,
            editing_item: None,
            items,
        }
    }
}
