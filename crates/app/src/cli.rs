use clap::{Args, Parser, Subcommand};
use discussion_core::domain::DEFAULT_LIMIT;

/// Work with GitHub Discussions from the command line.
#[derive(Debug, Parser)]
#[command(name = "gh-discussion", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List discussions in a repository
    List(ListArgs),
    /// Display the title, body, and other information about a discussion
    View(ViewArgs),
    /// Create a new discussion
    Create(CreateArgs),
    /// Search discussions by creation date, author, and keywords
    Search(SearchArgs),
}

impl Command {
    /// Whether the command talks to the GraphQL API; `--web` and `create` only open pages.
    pub fn calls_forge(&self) -> bool {
        match self {
            Command::List(args) => !args.web,
            Command::View(args) => !args.web,
            Command::Create(_) => false,
            Command::Search(_) => true,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output JSON with the specified comma-separated fields
    #[arg(long, value_name = "FIELDS", conflicts_with = "template")]
    pub json: Option<String>,
    /// Format output using a Go template
    #[arg(long, value_name = "TMPL")]
    pub template: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Select another repository using the OWNER/REPO format
    #[arg(short = 'R', long)]
    pub repo: Option<String>,
    /// Filter by author
    #[arg(short, long)]
    pub author: Option<String>,
    /// Search discussions with a query
    #[arg(short = 'S', long)]
    pub search: Option<String>,
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,
    /// Filter by answered status (true/false)
    #[arg(long, value_name = "BOOL")]
    pub answered: Option<String>,
    /// Filter by labels
    #[arg(short, long = "label", value_name = "NAME", value_delimiter = ',')]
    pub labels: Vec<String>,
    /// Maximum number of discussions to fetch
    #[arg(short = 'L', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Open the discussion list in the web browser
    #[arg(short, long, conflicts_with_all = ["json", "template"])]
    pub web: bool,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Discussion number or URL
    #[arg(value_name = "NUMBER | URL")]
    pub discussion: String,
    /// Select another repository using the OWNER/REPO format
    #[arg(short = 'R', long)]
    pub repo: Option<String>,
    /// View discussion comments
    #[arg(short, long)]
    pub comments: bool,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Open the discussion in the web browser
    #[arg(short, long, conflicts_with_all = ["json", "template"])]
    pub web: bool,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Select another repository using the OWNER/REPO format
    #[arg(short = 'R', long)]
    pub repo: Option<String>,
    /// Title for the discussion
    #[arg(long)]
    pub title: Option<String>,
    /// Body for the discussion
    #[arg(long)]
    pub body: Option<String>,
    /// Category for the discussion
    #[arg(long)]
    pub category: Option<String>,
    /// Open the discussion creation form in the web browser
    #[arg(short, long)]
    pub web: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Earliest creation date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,
    /// Latest creation date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
    /// Author username
    #[arg(long)]
    pub user: Option<String>,
    /// Search keywords
    #[arg(short, long = "keyword", value_name = "WORD", value_delimiter = ',')]
    pub keywords: Vec<String>,
    /// Restrict the search to one repository (OWNER/REPO)
    #[arg(short = 'R', long)]
    pub repo: Option<String>,
    /// Maximum number of discussions to fetch
    #[arg(short = 'L', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
    #[command(flatten)]
    pub output: OutputArgs,
}
