pub mod expression;
pub mod variables;

pub use expression::{range_expression, search_expression};
pub use variables::{
    DiscussionOrder, RepositoryListVars, SearchVars, find_category_id, repository_variables,
    search_variables,
};

use discussion_core::domain::ListOptions;

/// The remote query a list request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Repository,
    Search,
}

/// Free text and author filters are only understood by the search endpoint.
pub fn select_endpoint(opts: &ListOptions) -> Endpoint {
    if opts.search().is_some() || opts.author().is_some() {
        Endpoint::Search
    } else {
        Endpoint::Repository
    }
}
