//! Notice Text Value Objects
//!
//! Title and body of a notice. Both must contain something other than
//! whitespace; lengths are counted in characters. Control characters other
//! than line breaks and tabs are rejected (Postgres `TEXT` cannot hold NUL).

use kernel::error::app_error::{AppError, AppResult};

/// Maximum title length
pub const TITLE_MAX_LENGTH: usize = 200;

/// Maximum content length
pub const CONTENT_MAX_LENGTH: usize = 10_000;

fn has_forbidden_control(text: &str) -> bool {
    text.chars()
        .any(|ch| ch.is_control() && !matches!(ch, '\n' | '\r' | '\t'))
}

/// Notice title (stored trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeTitle(String);

impl NoticeTitle {
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::bad_request("Title is required"));
        }

        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }

        if has_forbidden_control(&title) {
            return Err(AppError::bad_request("Title contains invalid characters"));
        }

        Ok(Self(title))
    }

    /// From database (trusted)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Notice body (stored as given)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeContent(String);

impl NoticeContent {
    pub fn new(content: impl Into<String>) -> AppResult<Self> {
        let content = content.into();

        if content.trim().is_empty() {
            return Err(AppError::bad_request("Content is required"));
        }

        if content.chars().count() > CONTENT_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Content must be at most {} characters",
                CONTENT_MAX_LENGTH
            )));
        }

        if has_forbidden_control(&content) {
            return Err(AppError::bad_request("Content contains invalid characters"));
        }

        Ok(Self(content))
    }

    /// From database (trusted)
    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
