use discussion_core::domain::{Category, ListOptions};
use serde::Serialize;

use crate::query::expression::search_expression;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionOrder {
    pub field: &'static str,
    pub direction: &'static str,
}

impl DiscussionOrder {
    pub fn updated_desc() -> Self {
        Self {
            field: "UPDATED_AT",
            direction: "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryListVars {
    pub owner: String,
    pub repo: String,
    pub first: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    pub order_by: DiscussionOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answered: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchVars {
    pub query: String,
    pub first: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Variables for the repository-scoped list query. A category that did not
/// resolve to an id simply leaves `categoryId` out.
pub fn repository_variables(
    opts: &ListOptions,
    category_id: Option<String>,
    first: usize,
    after: Option<&str>,
) -> RepositoryListVars {
    RepositoryListVars {
        owner: opts.owner.clone(),
        repo: opts.repo.clone(),
        first,
        after: after.map(str::to_string),
        order_by: DiscussionOrder::updated_desc(),
        category_id: category_id.filter(|id| !id.is_empty()),
        answered: opts.answered,
    }
}

pub fn search_variables(opts: &ListOptions, first: usize, after: Option<&str>) -> SearchVars {
    SearchVars {
        query: search_expression(opts),
        first,
        after: after.map(str::to_string),
    }
}

/// Case-sensitive exact name match.
pub fn find_category_id(categories: &[Category], name: &str) -> Option<String> {
    categories
        .iter()
        .find(|category| category.name == name)
        .and_then(|category| category.id.clone())
}

#[cfg(test)]
mod tests {
    use discussion_core::types::RepoRef;
    use serde_json::json;

    use super::*;

    fn opts() -> ListOptions {
        ListOptions::for_repo(&RepoRef::try_from("cli/cli").unwrap())
    }

    fn category(name: &str, id: &str) -> Category {
        Category {
            id: Some(id.to_string()),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn repository_variables_with_category_and_answered() {
        let opts = ListOptions {
            category: Some("General".to_string()),
            answered: Some(true),
            ..opts()
        };
        let vars = repository_variables(&opts, Some("Y".to_string()), opts.limit, None);
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({
                "owner": "cli",
                "repo": "cli",
                "first": 30,
                "orderBy": { "field": "UPDATED_AT", "direction": "DESC" },
                "answered": true,
                "categoryId": "Y"
            })
        );
    }

    #[test]
    fn unresolved_category_omits_category_id() {
        let opts = ListOptions {
            category: Some("Missing".to_string()),
            ..opts()
        };
        let vars = repository_variables(&opts, None, 10, None);
        let value = serde_json::to_value(&vars).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("categoryId"));
        assert!(!object.contains_key("answered"));
        assert!(!object.contains_key("after"));
        assert_eq!(object["first"], json!(10));
    }

    #[test]
    fn cursor_is_forwarded() {
        let vars = search_variables(&opts(), 5, Some("Y3Vyc29y"));
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({ "query": "repo:cli/cli", "first": 5, "after": "Y3Vyc29y" })
        );
    }

    #[test]
    fn category_lookup_is_exact_and_case_sensitive() {
        let categories = vec![category("Ideas", "X"), category("General", "Y")];
        assert_eq!(find_category_id(&categories, "General").as_deref(), Some("Y"));
        assert_eq!(find_category_id(&categories, "general"), None);
        assert_eq!(find_category_id(&categories, "Q&A"), None);
    }
}
