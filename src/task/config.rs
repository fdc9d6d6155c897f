//! Static configuration for a task list store.

use crate::task::domain::{CategorySet, Platform, TaskDomainError};
use serde::Deserialize;
use thiserror::Error;

/// Configuration fixed when a [`TaskListStore`](crate::task::services::TaskListStore)
/// is built.
///
/// # Examples
///
/// ```
/// use todo_store::task::{config::StoreConfig, domain::Platform};
///
/// let config = StoreConfig::default();
/// assert_eq!(config.categories.len(), 3);
/// assert_eq!(config.platform, Platform::Ios);
///
/// let web = StoreConfig::from_json_str(r#"{"platform": "web"}"#)?;
/// assert_eq!(web.platform, Platform::Web);
/// # Ok::<(), todo_store::task::config::StoreConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Categories a task may be tagged with.
    pub categories: CategorySet,
    /// Platform the presentation layer runs on.
    pub platform: Platform,
}

/// Errors returned while loading a [`StoreConfig`].
#[derive(Debug, Error)]
pub enum StoreConfigError {
    /// The input is not valid configuration JSON.
    #[error("invalid store configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured category set is invalid.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Wire shape of the configuration before category validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStoreConfig {
    categories: Option<Vec<String>>,
    platform: Option<Platform>,
}

impl StoreConfig {
    /// Parses configuration from JSON such as
    /// `{"categories": ["Home", "Errands"], "platform": "android"}`.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError::Parse`] for malformed JSON or unknown
    /// fields and [`StoreConfigError::Domain`] for an invalid category set.
    pub fn from_json_str(json: &str) -> Result<Self, StoreConfigError> {
        let raw: RawStoreConfig = serde_json::from_str(json)?;
        let categories = match raw.categories {
            Some(labels) => CategorySet::new(labels)?,
            None => CategorySet::default(),
        };
        Ok(Self {
            categories,
            platform: raw.platform.unwrap_or_default(),
        })
    }

    /// Replaces the category set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the labels do not form a valid set.
    pub fn with_categories<I, S>(mut self, labels: I) -> Result<Self, TaskDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = CategorySet::new(labels)?;
        Ok(self)
    }

    /// Sets the platform.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}
