pub mod github;
pub mod query;
