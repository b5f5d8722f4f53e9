pub mod client;
pub mod graphql;
mod queries;

pub use client::{ForgeError, GithubClient, MAX_PAGE_SIZE};
pub use graphql::{GITHUB_GRAPHQL_ENDPOINT, GraphTransport, HttpTransport, TransportError};
