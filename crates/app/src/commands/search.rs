use std::io::Write;

use discussion_core::domain::RangeSearch;
use discussion_core::types::{DateRange, RepoRef};
use discussion_infra::github::GraphTransport;

use super::{Session, validate_limit};
use crate::AppError;
use crate::cli::SearchArgs;
use crate::output::{Formatter, OutputOptions};

pub async fn run<T: GraphTransport, W: Write>(
    session: &mut Session<'_, T, W>,
    args: &SearchArgs,
) -> Result<(), AppError> {
    let range = DateRange::from_bounds(args.from.as_deref(), args.to.as_deref())
        .map_err(|err| AppError::Usage(err.to_string()))?;
    let repo = args
        .repo
        .as_deref()
        .map(RepoRef::try_from)
        .transpose()
        .map_err(|err| AppError::Usage(err.to_string()))?;
    let search = RangeSearch {
        range,
        author: args.user.clone(),
        repo,
        keywords: args.keywords.clone(),
    };
    if !search.has_conditions() {
        return Err(AppError::Usage(
            "at least one search condition must be specified".to_string(),
        ));
    }
    let limit = validate_limit(args.limit)?;

    let connection = session.client.search_range(&search, limit).await?;
    let output = OutputOptions::from_flags(args.output.json.as_deref(), args.output.template.as_deref());
    Formatter::new(&mut session.out, output)
        .with_now(session.now)
        .format_discussion_list(&connection.nodes)?;
    Ok(())
}
