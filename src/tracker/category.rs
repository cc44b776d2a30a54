//! Category catalog: the fixed reference data every activity points at.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry.
pub type CategoryId = u32;

/// Id of the food category, the form's default selection.
pub const FOOD: CategoryId = 1;
/// Id of the exercise category.
pub const EXERCISE: CategoryId = 2;

/// Distinguishes calories eaten from calories burned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Intake,
    Expenditure,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Intake => "Intake",
            CategoryKind::Expenditure => "Expenditure",
        };
        f.write_str(label)
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}

/// Read-only list of categories, defined once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            Category::new(FOOD, "Food", CategoryKind::Intake),
            Category::new(EXERCISE, "Exercise", CategoryKind::Expenditure),
        ])
    }
}

impl CategoryCatalog {
    /// Builds a catalog from explicit entries. Order is preserved and the
    /// first entry becomes the default selection.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Display name for `id`, or `None` when no entry matches.
    pub fn resolve_name(&self, id: CategoryId) -> Option<&str> {
        self.get(id).map(|category| category.name.as_str())
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn kind_of(&self, id: CategoryId) -> Option<CategoryKind> {
        self.get(id).map(|category| category.kind)
    }

    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
