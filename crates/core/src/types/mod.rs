pub mod date_range;
pub mod repo_ref;

pub use date_range::DateRange;
pub use repo_ref::RepoRef;
