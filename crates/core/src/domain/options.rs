use crate::types::date_range::DateRange;
use crate::types::repo_ref::RepoRef;

pub const DEFAULT_LIMIT: usize = 30;

/// Filters for listing discussions. Empty strings count as unset.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    pub owner: String,
    pub repo: String,
    pub author: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub answered: Option<bool>,
    pub limit: usize,
    pub after: Option<String>,
    pub labels: Vec<String>,
}

impl ListOptions {
    pub fn for_repo(repo: &RepoRef) -> Self {
        Self {
            owner: repo.owner().to_string(),
            repo: repo.name().to_string(),
            author: None,
            search: None,
            category: None,
            answered: None,
            limit: DEFAULT_LIMIT,
            after: None,
            labels: Vec::new(),
        }
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(self.author.as_deref())
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    pub fn after(&self) -> Option<&str> {
        non_empty(self.after.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub show_comments: bool,
}

/// Global discussion search bounded by creation date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSearch {
    pub range: DateRange,
    pub author: Option<String>,
    pub repo: Option<RepoRef>,
    pub keywords: Vec<String>,
}

impl RangeSearch {
    pub fn has_conditions(&self) -> bool {
        !self.range.is_empty()
            || non_empty(self.author.as_deref()).is_some()
            || self.keywords.iter().any(|keyword| !keyword.trim().is_empty())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
