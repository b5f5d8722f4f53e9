use std::io::Write;

use tracing::debug;

use super::Session;
use crate::AppError;
use crate::browser::{DiscussionPage, discussions_url};
use crate::cli::CreateArgs;
use crate::resolve::resolve_repo;

/// Creation happens on the web for now; the command only points there.
pub fn run<T, W: Write>(session: &mut Session<'_, T, W>, args: &CreateArgs) -> Result<(), AppError> {
    let repo = resolve_repo(args.repo.as_deref(), session.current)
        .map_err(|err| AppError::Usage(format!("failed to parse repository: {err}")))?;
    let url = discussions_url(session.host, &repo, DiscussionPage::New);
    debug!(
        %repo,
        title = ?args.title,
        category = ?args.category,
        has_body = args.body.is_some(),
        "create requested"
    );

    if args.web {
        return session.open_in_browser(&url);
    }

    writeln!(session.out, "Discussion creation via CLI is not yet implemented.")?;
    writeln!(
        session.out,
        "You can create a discussion in the web browser at: {url}"
    )?;
    Ok(())
}
