use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notice category. Closed set; anything else is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Academics,
    Regular,
    Others,
}

impl NoticeCategory {
    pub const ALL: [NoticeCategory; 3] = [
        NoticeCategory::Academics,
        NoticeCategory::Regular,
        NoticeCategory::Others,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            NoticeCategory::Academics => "academics",
            NoticeCategory::Regular => "regular",
            NoticeCategory::Others => "others",
        }
    }

    /// Parse a stored or submitted category code (exact match)
    pub fn from_code(code: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                AppError::bad_request("Category must be one of: academics, regular, others")
            })
    }
}

impl FromStr for NoticeCategory {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        NoticeCategory::from_code(s)
    }
}

impl fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(
            NoticeCategory::from_code("academics").unwrap(),
            NoticeCategory::Academics
        );
        assert_eq!(
            NoticeCategory::from_code("regular").unwrap(),
            NoticeCategory::Regular
        );
        assert_eq!(
            NoticeCategory::from_code("others").unwrap(),
            NoticeCategory::Others
        );
    }

    #[test]
    fn test_unknown_category() {
        for bad in ["", "Academics", "sports", "all"] {
            let err = NoticeCategory::from_code(bad).unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_serde_is_lowercase() {
        let json = serde_json::to_string(&NoticeCategory::Regular).unwrap();
        assert_eq!(json, "\"regular\"");
    }
}
