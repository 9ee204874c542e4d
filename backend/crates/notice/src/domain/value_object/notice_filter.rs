//! Notice Listing Filter

use kernel::error::app_error::AppResult;

use super::notice_category::NoticeCategory;

/// Optional narrowing of the notice list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeFilter {
    /// Only this category
    pub category: Option<NoticeCategory>,
    /// Case-insensitive substring of title or content
    pub query: Option<String>,
}

impl NoticeFilter {
    /// Build from raw query parameters
    ///
    /// `category=all` (or absent) means every category. A blank `q` is
    /// ignored.
    pub fn parse(category: Option<&str>, query: Option<&str>) -> AppResult<Self> {
        let category = match category.map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(code) => Some(NoticeCategory::from_code(code)?),
        };

        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        Ok(Self { category, query })
    }

    /// Whether a notice with this text and category passes the filter
    pub fn matches(&self, category: NoticeCategory, title: &str, content: &str) -> bool {
        if self.category.is_some_and(|c| c != category) {
            return false;
        }

        match &self.query {
            None => true,
            Some(q) => {
                let q = q.to_lowercase();
                title.to_lowercase().contains(&q) || content.to_lowercase().contains(&q)
            }
        }
    }
}
