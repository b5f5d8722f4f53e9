use discussion_core::domain::{
    Category, Connection, Discussion, ListOptions, RangeSearch, Repository, ViewOptions,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::github::graphql::{GraphTransport, TransportError};
use crate::github::queries;
use crate::query::{
    Endpoint, SearchVars, find_category_id, range_expression, repository_variables,
    search_expression, select_endpoint,
};

/// The forge rejects `first` values above this.
pub const MAX_PAGE_SIZE: usize = 100;

const LIST_CONTEXT: &str = "failed to list discussions";
const SEARCH_CONTEXT: &str = "failed to search discussions";
const GET_DISCUSSION_CONTEXT: &str = "failed to get discussion";
const CATEGORY_ID_CONTEXT: &str = "failed to get category ID";
const CATEGORIES_CONTEXT: &str = "failed to get discussion categories";
const REPOSITORY_CONTEXT: &str = "failed to get repository info";

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: TransportError,
    },
    #[error("{context}: {entity} not found")]
    NotFound {
        context: &'static str,
        entity: String,
    },
    #[error("{context}: invalid payload: {source}")]
    Payload {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Usage(String),
    #[error("operation cancelled")]
    Cancelled,
}

impl ForgeError {
    fn transport(context: &'static str, source: TransportError) -> Self {
        match source {
            TransportError::Cancelled => ForgeError::Cancelled,
            source => ForgeError::Transport { context, source },
        }
    }

    fn not_found(context: &'static str, entity: impl Into<String>) -> Self {
        ForgeError::NotFound {
            context,
            entity: entity.into(),
        }
    }
}

/// Discussion queries over an injected GraphQL transport.
#[derive(Debug, Clone)]
pub struct GithubClient<T> {
    transport: T,
}

impl<T: GraphTransport> GithubClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_discussions(
        &self,
        opts: &ListOptions,
    ) -> Result<Connection<Discussion>, ForgeError> {
        if opts.limit == 0 {
            return Err(ForgeError::Usage("invalid limit: 0".to_string()));
        }
        match select_endpoint(opts) {
            Endpoint::Search => {
                let expression = search_expression(opts);
                debug!(query = %expression, limit = opts.limit, "searching discussions");
                let source = PageSource::Search {
                    expression,
                    context: LIST_CONTEXT,
                };
                self.collect_pages(&source, opts.limit, opts.after()).await
            }
            Endpoint::Repository => {
                let category_id = match opts.category() {
                    Some(name) => {
                        let id = self.get_category_id(&opts.owner, &opts.repo, name).await?;
                        if id.is_none() {
                            debug!(category = name, "category not found; listing without it");
                        }
                        id
                    }
                    None => None,
                };
                debug!(
                    owner = %opts.owner,
                    repo = %opts.repo,
                    limit = opts.limit,
                    "listing repository discussions"
                );
                let source = PageSource::Repository { opts, category_id };
                self.collect_pages(&source, opts.limit, opts.after()).await
            }
        }
    }

    /// Global search bounded by creation date.
    pub async fn search_range(
        &self,
        search: &RangeSearch,
        limit: usize,
    ) -> Result<Connection<Discussion>, ForgeError> {
        if limit == 0 {
            return Err(ForgeError::Usage("invalid limit: 0".to_string()));
        }
        let expression = range_expression(search);
        debug!(query = %expression, limit, "searching discussions by date range");
        let source = PageSource::Search {
            expression,
            context: SEARCH_CONTEXT,
        };
        self.collect_pages(&source, limit, None).await
    }

    pub async fn get_discussion(&self, opts: &ViewOptions) -> Result<Discussion, ForgeError> {
        let vars = DiscussionVars {
            owner: &opts.owner,
            repo: &opts.repo,
            number: opts.number,
            include_comments: opts.show_comments,
        };
        debug!(
            owner = %opts.owner,
            repo = %opts.repo,
            number = opts.number,
            comments = opts.show_comments,
            "fetching discussion"
        );
        let data: DiscussionResponse = self
            .query(queries::GET_DISCUSSION, &vars, GET_DISCUSSION_CONTEXT)
            .await?;
        let repository = data.repository.ok_or_else(|| {
            ForgeError::not_found(
                GET_DISCUSSION_CONTEXT,
                format!("repository {}/{}", opts.owner, opts.repo),
            )
        })?;
        repository.discussion.ok_or_else(|| {
            ForgeError::not_found(
                GET_DISCUSSION_CONTEXT,
                format!("discussion #{}", opts.number),
            )
        })
    }

    pub async fn get_repository_info(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Repository, ForgeError> {
        let data: RepositoryResponse = self
            .query(
                queries::GET_REPOSITORY,
                &RepositoryVars { owner, repo },
                REPOSITORY_CONTEXT,
            )
            .await?;
        data.repository.ok_or_else(|| {
            ForgeError::not_found(REPOSITORY_CONTEXT, format!("repository {owner}/{repo}"))
        })
    }

    pub async fn get_discussion_categories(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Category>, ForgeError> {
        self.fetch_categories(owner, repo, CATEGORIES_CONTEXT).await
    }

    /// Returns `Ok(None)` when no category carries exactly this name.
    pub async fn get_category_id(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Option<String>, ForgeError> {
        let categories = self.fetch_categories(owner, repo, CATEGORY_ID_CONTEXT).await?;
        Ok(find_category_id(&categories, name))
    }

    async fn fetch_categories(
        &self,
        owner: &str,
        repo: &str,
        context: &'static str,
    ) -> Result<Vec<Category>, ForgeError> {
        let data: CategoriesResponse = self
            .query(
                queries::GET_DISCUSSION_CATEGORIES,
                &RepositoryVars { owner, repo },
                context,
            )
            .await?;
        let repository = data
            .repository
            .ok_or_else(|| ForgeError::not_found(context, format!("repository {owner}/{repo}")))?;
        Ok(repository.discussion_categories.nodes)
    }

    /// Follows `endCursor` until `limit` nodes are collected or the forge runs out.
    async fn collect_pages(
        &self,
        source: &PageSource<'_>,
        limit: usize,
        after: Option<&str>,
    ) -> Result<Connection<Discussion>, ForgeError> {
        let mut nodes = Vec::new();
        let mut cursor = after.map(str::to_string);
        let mut page_info = None;
        let mut total_count = None;
        loop {
            let first = (limit - nodes.len()).min(MAX_PAGE_SIZE);
            let page = self.fetch_page(source, first, cursor.as_deref()).await?;
            let has_next = page.has_next_page();
            let next_cursor = page.end_cursor().map(str::to_string);
            let received = page.nodes.len();
            nodes.extend(page.nodes);
            page_info = page.page_info;
            total_count = page.total_count.or(total_count);
            if nodes.len() >= limit || !has_next || received == 0 || next_cursor.is_none() {
                break;
            }
            debug!(collected = nodes.len(), limit, "fetching next page");
            cursor = next_cursor;
        }
        nodes.truncate(limit);
        Ok(Connection {
            nodes,
            page_info,
            total_count,
        })
    }

    async fn fetch_page(
        &self,
        source: &PageSource<'_>,
        first: usize,
        after: Option<&str>,
    ) -> Result<Connection<Discussion>, ForgeError> {
        match source {
            PageSource::Repository { opts, category_id } => {
                let vars = repository_variables(opts, category_id.clone(), first, after);
                let data: ListResponse = self
                    .query(queries::LIST_DISCUSSIONS, &vars, LIST_CONTEXT)
                    .await?;
                let repository = data.repository.ok_or_else(|| {
                    ForgeError::not_found(
                        LIST_CONTEXT,
                        format!("repository {}/{}", opts.owner, opts.repo),
                    )
                })?;
                Ok(repository.discussions)
            }
            PageSource::Search {
                expression,
                context,
            } => {
                let vars = SearchVars {
                    query: expression.clone(),
                    first,
                    after: after.map(str::to_string),
                };
                let data: SearchResponse = self
                    .query(queries::SEARCH_DISCUSSIONS, &vars, *context)
                    .await?;
                data.search.into_connection(*context)
            }
        }
    }

    async fn query<R, V>(
        &self,
        query: &str,
        variables: &V,
        context: &'static str,
    ) -> Result<R, ForgeError>
    where
        R: DeserializeOwned,
        V: Serialize,
    {
        let variables = serde_json::to_value(variables)
            .map_err(|source| ForgeError::Payload { context, source })?;
        let data = self
            .transport
            .execute(query, variables)
            .await
            .map_err(|err| ForgeError::transport(context, err))?;
        serde_json::from_value(data).map_err(|source| ForgeError::Payload { context, source })
    }
}

enum PageSource<'a> {
    Repository {
        opts: &'a ListOptions,
        category_id: Option<String>,
    },
    Search {
        expression: String,
        context: &'static str,
    },
}

#[derive(Debug, Serialize)]
struct RepositoryVars<'a> {
    owner: &'a str,
    repo: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DiscussionVars<'a> {
    owner: &'a str,
    repo: &'a str,
    number: u64,
    include_comments: bool,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    repository: Option<RepositoryDiscussions>,
}

#[derive(Debug, Deserialize)]
struct RepositoryDiscussions {
    discussions: Connection<Discussion>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    search: SearchConnection,
}

/// Search nodes that are not discussions come back as empty objects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchConnection {
    #[serde(default)]
    nodes: Vec<Value>,
    #[serde(default)]
    page_info: Option<discussion_core::domain::PageInfo>,
}

impl SearchConnection {
    fn into_connection(self, context: &'static str) -> Result<Connection<Discussion>, ForgeError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            if node.as_object().is_none_or(|object| object.is_empty()) {
                continue;
            }
            let discussion = serde_json::from_value(node)
                .map_err(|source| ForgeError::Payload { context, source })?;
            nodes.push(discussion);
        }
        Ok(Connection {
            nodes,
            page_info: self.page_info,
            total_count: None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct DiscussionResponse {
    repository: Option<RepositoryDiscussion>,
}

#[derive(Debug, Deserialize)]
struct RepositoryDiscussion {
    discussion: Option<Discussion>,
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    repository: Option<RepositoryCategories>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryCategories {
    discussion_categories: Connection<Category>,
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use discussion_core::types::{DateRange, RepoRef};
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct FakeTransport {
        responses: Mutex<VecDeque<Result<Value, TransportError>>>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl FakeTransport {
        fn with(responses: Vec<Result<Value, TransportError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GraphTransport for FakeTransport {
        async fn execute(&self, query: &str, variables: Value) -> Result<Value, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), variables));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(TransportError::MissingData("no canned response")))
        }
    }

    fn node(number: u64) -> Value {
        json!({
            "id": format!("D_{number}"),
            "number": number,
            "title": format!("Discussion {number}"),
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "url": format!("https://github.com/cli/cli/discussions/{number}"),
            "comments": { "totalCount": 0 }
        })
    }

    fn list_page(numbers: std::ops::RangeInclusive<u64>, has_next: bool, cursor: &str) -> Value {
        json!({
            "repository": {
                "discussions": {
                    "pageInfo": { "hasNextPage": has_next, "endCursor": cursor },
                    "nodes": numbers.map(node).collect::<Vec<_>>()
                }
            }
        })
    }

    fn categories() -> Value {
        json!({
            "repository": {
                "discussionCategories": {
                    "nodes": [
                        { "id": "X", "name": "Ideas" },
                        { "id": "Y", "name": "General" }
                    ]
                }
            }
        })
    }

    fn opts() -> ListOptions {
        ListOptions::for_repo(&RepoRef::try_from("cli/cli").unwrap())
    }

    #[tokio::test]
    async fn search_filters_route_to_search_query() {
        let transport = FakeTransport::with(vec![Ok(json!({
            "search": {
                "pageInfo": { "hasNextPage": false, "endCursor": null },
                "nodes": [node(1), {}]
            }
        }))]);
        let client = GithubClient::new(transport);
        let opts = ListOptions {
            search: Some("API docs".to_string()),
            author: Some("alice".to_string()),
            labels: vec!["bug".to_string(), "ui".to_string()],
            answered: Some(false),
            limit: 5,
            ..opts()
        };
        let result = client.list_discussions(&opts).await.unwrap();
        assert_eq!(result.nodes.len(), 1);

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("search(type: DISCUSSION"));
        assert_eq!(
            calls[0].1,
            json!({
                "query": r#"repo:cli/cli API docs author:alice is:unanswered label:"bug" label:"ui""#,
                "first": 5
            })
        );
    }

    #[tokio::test]
    async fn category_is_resolved_before_repository_list() {
        let transport = FakeTransport::with(vec![
            Ok(categories()),
            Ok(list_page(1..=2, false, "c1")),
        ]);
        let client = GithubClient::new(transport);
        let opts = ListOptions {
            category: Some("General".to_string()),
            answered: Some(true),
            ..opts()
        };
        let result = client.list_discussions(&opts).await.unwrap();
        assert_eq!(result.nodes.len(), 2);

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].0.contains("discussionCategories"));
        assert_eq!(
            calls[1].1,
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

    #[tokio::test]
    async fn unknown_category_is_silently_dropped() {
        let transport = FakeTransport::with(vec![Ok(categories()), Ok(list_page(1..=1, false, "c"))]);
        let client = GithubClient::new(transport);
        let opts = ListOptions {
            category: Some("Nope".to_string()),
            ..opts()
        };
        let result = client.list_discussions(&opts).await.unwrap();
        assert_eq!(result.nodes.len(), 1);
        let calls = client.transport().calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].1.get("categoryId").is_none());
    }

    #[tokio::test]
    async fn pages_until_limit_is_reached() {
        let transport = FakeTransport::with(vec![
            Ok(list_page(1..=100, true, "p1")),
            Ok(list_page(101..=150, true, "p2")),
        ]);
        let client = GithubClient::new(transport);
        let opts = ListOptions {
            limit: 150,
            ..opts()
        };
        let result = client.list_discussions(&opts).await.unwrap();
        assert_eq!(result.nodes.len(), 150);
        assert_eq!(result.nodes[0].number, 1);
        assert_eq!(result.nodes[149].number, 150);

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1["first"], json!(100));
        assert!(calls[0].1.get("after").is_none());
        assert_eq!(calls[1].1["first"], json!(50));
        assert_eq!(calls[1].1["after"], json!("p1"));
    }

    #[tokio::test]
    async fn stops_when_forge_has_no_more_pages() {
        let transport = FakeTransport::with(vec![Ok(list_page(1..=3, false, "p1"))]);
        let client = GithubClient::new(transport);
        let opts = ListOptions {
            limit: 200,
            ..opts()
        };
        let result = client.list_discussions(&opts).await.unwrap();
        assert_eq!(result.nodes.len(), 3);
        assert_eq!(client.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn zero_limit_is_a_usage_error_without_a_request() {
        let client = GithubClient::new(FakeTransport::default());
        let opts = ListOptions { limit: 0, ..opts() };
        let err = client.list_discussions(&opts).await.unwrap_err();
        assert!(matches!(err, ForgeError::Usage(_)));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn transport_errors_carry_context() {
        let transport = FakeTransport::with(vec![Err(TransportError::Graphql("boom".to_string()))]);
        let client = GithubClient::new(transport);
        let err = client.list_discussions(&opts()).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to list discussions: GraphQL: boom");
    }

    #[tokio::test]
    async fn cancellation_is_propagated_unchanged() {
        let transport = FakeTransport::with(vec![Err(TransportError::Cancelled)]);
        let client = GithubClient::new(transport);
        let err = client.list_discussions(&opts()).await.unwrap_err();
        assert!(matches!(err, ForgeError::Cancelled));
    }

    #[tokio::test]
    async fn null_discussion_is_not_found() {
        let transport = FakeTransport::with(vec![Ok(json!({
            "repository": { "discussion": null }
        }))]);
        let client = GithubClient::new(transport);
        let view = ViewOptions {
            owner: "a".to_string(),
            repo: "b".to_string(),
            number: 999,
            show_comments: false,
        };
        let err = client.get_discussion(&view).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to get discussion: discussion #999 not found"
        );
    }

    #[tokio::test]
    async fn get_discussion_forwards_comment_toggle() {
        let transport = FakeTransport::with(vec![Ok(json!({
            "repository": { "discussion": node(5) }
        }))]);
        let client = GithubClient::new(transport);
        let view = ViewOptions {
            owner: "a".to_string(),
            repo: "b".to_string(),
            number: 5,
            show_comments: true,
        };
        let discussion = client.get_discussion(&view).await.unwrap();
        assert_eq!(discussion.number, 5);
        let calls = client.transport().calls();
        assert!(calls[0].0.contains("@include(if: $includeComments)"));
        assert_eq!(
            calls[0].1,
            json!({ "owner": "a", "repo": "b", "number": 5, "includeComments": true })
        );
    }

    #[tokio::test]
    async fn null_repository_is_not_found() {
        let transport = FakeTransport::with(vec![Ok(json!({ "repository": null }))]);
        let client = GithubClient::new(transport);
        let err = client.get_repository_info("o", "r").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to get repository info: repository o/r not found"
        );
    }

    #[tokio::test]
    async fn categories_keep_forge_order() {
        let transport = FakeTransport::with(vec![Ok(categories())]);
        let client = GithubClient::new(transport);
        let categories = client.get_discussion_categories("o", "r").await.unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ideas", "General"]);
    }

    #[tokio::test]
    async fn category_id_lookup_failure_has_context() {
        let transport = FakeTransport::with(vec![Err(TransportError::Graphql("denied".to_string()))]);
        let client = GithubClient::new(transport);
        let err = client.get_category_id("o", "r", "General").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to get category ID: GraphQL: denied");
    }

    #[tokio::test]
    async fn range_search_uses_date_expression() {
        let transport = FakeTransport::with(vec![Ok(json!({
            "search": { "pageInfo": { "hasNextPage": false }, "nodes": [] }
        }))]);
        let client = GithubClient::new(transport);
        let search = RangeSearch {
            range: DateRange::from_bounds(Some("2023-01-01"), Some("2023-01-31")).unwrap(),
            author: Some("alice".to_string()),
            repo: Some(RepoRef::try_from("cli/cli").unwrap()),
            keywords: vec!["bug".to_string()],
        };
        let result = client.search_range(&search, 30).await.unwrap();
        assert!(result.nodes.is_empty());
        let calls = client.transport().calls();
        assert_eq!(
            calls[0].1["query"],
            json!("created:2023-01-01..2023-01-31 author:alice repo:cli/cli bug")
        );
    }
}
