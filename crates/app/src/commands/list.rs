use std::io::Write;

use discussion_core::domain::ListOptions;
use discussion_infra::github::GraphTransport;
use tracing::debug;

use super::{Session, parse_answered, validate_limit};
use crate::AppError;
use crate::browser::{DiscussionPage, discussions_url};
use crate::cli::ListArgs;
use crate::output::{Formatter, OutputOptions};
use crate::resolve::resolve_repo;

pub async fn run<T: GraphTransport, W: Write>(
    session: &mut Session<'_, T, W>,
    args: &ListArgs,
) -> Result<(), AppError> {
    let answered = parse_answered(args.answered.as_deref())?;
    let limit = validate_limit(args.limit)?;
    let repo = resolve_repo(args.repo.as_deref(), session.current)?;

    if args.web {
        let url = discussions_url(session.host, &repo, DiscussionPage::List);
        return session.open_in_browser(&url);
    }

    let opts = ListOptions {
        author: args.author.clone(),
        search: args.search.clone(),
        category: args.category.clone(),
        answered,
        limit,
        labels: args.labels.clone(),
        ..ListOptions::for_repo(&repo)
    };
    let connection = session.client.list_discussions(&opts).await?;
    debug!(%repo, count = connection.nodes.len(), "discussions fetched");

    let output = OutputOptions::from_flags(args.output.json.as_deref(), args.output.template.as_deref());
    Formatter::new(&mut session.out, output)
        .with_now(session.now)
        .format_discussion_list(&connection.nodes)?;
    Ok(())
}
