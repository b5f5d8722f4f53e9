pub mod discussion;
pub mod options;

pub use discussion::{
    Category, Comment, Connection, Discussion, Label, PageInfo, ReactionGroup, ReactionUsers,
    Repository, User,
};
pub use options::{DEFAULT_LIMIT, ListOptions, RangeSearch, ViewOptions};
