//! One-shot notices carried in the session between a redirect and the next
//! rendered page.

use serde::{Deserialize, Serialize};

/// Visual category of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    /// Completed action.
    Success,
    /// Rejected input or refused action.
    Error,
    /// Neutral notice.
    Info,
}

/// A message queued for the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Styling hint for templates.
    pub category: FlashCategory,
    /// Text shown to the user.
    pub message: String,
}

impl FlashMessage {
    /// Build a message in `category`.
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// Shorthand for [`FlashCategory::Success`].
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Success, message)
    }

    /// Shorthand for [`FlashCategory::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Error, message)
    }

    /// Shorthand for [`FlashCategory::Info`].
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Info, message)
    }
}
