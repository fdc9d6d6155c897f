//! Target platform and the due-date entry affordance it implies.

use serde::{Deserialize, Serialize};

/// Platform the presentation layer runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Apple mobile platform.
    #[default]
    Ios,
    /// Android mobile platform.
    Android,
    /// Browser build.
    Web,
}

impl Platform {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
        }
    }
}

/// How the presentation layer should let the user enter a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateEntryMode {
    /// The platform's native date picker.
    NativePicker,
    /// A non-editable text rendering of the date, for platforms without a
    /// native picker.
    ReadOnlyText,
}

impl DateEntryMode {
    /// Chooses the entry mode for a platform.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Web => Self::ReadOnlyText,
            Platform::Ios | Platform::Android => Self::NativePicker,
        }
    }
}
