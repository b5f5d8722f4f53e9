use std::io::Write;

use discussion_core::domain::ViewOptions;
use discussion_infra::github::GraphTransport;

use super::Session;
use crate::AppError;
use crate::browser::{DiscussionPage, discussions_url};
use crate::cli::ViewArgs;
use crate::output::{Formatter, OutputOptions};
use crate::resolve::resolve_discussion_ref;

pub async fn run<T: GraphTransport, W: Write>(
    session: &mut Session<'_, T, W>,
    args: &ViewArgs,
) -> Result<(), AppError> {
    let (repo, number) =
        resolve_discussion_ref(&args.discussion, args.repo.as_deref(), session.current)?;

    if args.web {
        let url = discussions_url(session.host, &repo, DiscussionPage::Single(number));
        return session.open_in_browser(&url);
    }

    let opts = ViewOptions {
        owner: repo.owner().to_string(),
        repo: repo.name().to_string(),
        number,
        show_comments: args.comments,
    };
    let discussion = session.client.get_discussion(&opts).await?;

    let output = OutputOptions::from_flags(args.output.json.as_deref(), args.output.template.as_deref());
    Formatter::new(&mut session.out, output)
        .with_now(session.now)
        .format_discussion(&discussion)?;
    Ok(())
}
