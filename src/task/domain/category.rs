//! Category labels and the fixed set a task list is configured with.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels used when no category set is configured.
pub const DEFAULT_CATEGORY_LABELS: [&str; 3] = ["Work", "Personal", "Shopping"];

/// A trimmed, non-empty category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Creates a validated category label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategoryLabel`] when the label is
    /// empty after trimming.
    pub fn new(label: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyCategoryLabel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, non-empty set of distinct category labels.
///
/// The set is static configuration: it is fixed when the store is built and
/// every task's category is drawn from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    /// Creates a category set from labels, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategorySet`] for an empty input,
    /// [`TaskDomainError::EmptyCategoryLabel`] for a blank label, and
    /// [`TaskDomainError::DuplicateCategory`] when a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, TaskDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for label in labels {
            let category = Category::new(label)?;
            if categories.contains(&category) {
                return Err(TaskDomainError::DuplicateCategory(category.0));
            }
            categories.push(category);
        }

        if categories.is_empty() {
            return Err(TaskDomainError::EmptyCategorySet);
        }
        Ok(Self(categories))
    }

    /// Looks up a category by label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownCategory`] when no category in the
    /// set carries the (trimmed) label.
    pub fn resolve(&self, label: &str) -> Result<&Category, TaskDomainError> {
        let trimmed = label.trim();
        self.0
            .iter()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| TaskDomainError::UnknownCategory(label.to_owned()))
    }

    /// Returns `true` when the category belongs to this set.
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.0.contains(category)
    }

    /// Iterates over the categories in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    /// Returns the number of categories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a category set holds at least one category.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self(
            DEFAULT_CATEGORY_LABELS
                .iter()
                .map(|label| Category((*label).to_owned()))
                .collect(),
        )
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = TaskDomainError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.0.into_iter().map(String::from).collect()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
