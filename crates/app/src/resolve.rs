use discussion_core::types::RepoRef;

use crate::AppError;
use crate::repo_context::CurrentRepo;

const DISCUSSION_URL_PREFIX: &str = "https://github.com/";

pub fn resolve_repo(
    repo_override: Option<&str>,
    current: &dyn CurrentRepo,
) -> Result<RepoRef, AppError> {
    match repo_override {
        Some(raw) => RepoRef::try_from(raw).map_err(|err| AppError::Usage(err.to_string())),
        None => current.current_repo().ok_or_else(|| {
            AppError::Usage(
                "unable to determine repository. Use -R flag to specify repository".to_string(),
            )
        }),
    }
}

/// Splits a `view` argument into the repository and discussion number it names.
///
/// A discussion URL carries its own repository and ignores `-R`; a bare
/// number is resolved against `-R` or the current checkout.
pub fn resolve_discussion_ref(
    arg: &str,
    repo_override: Option<&str>,
    current: &dyn CurrentRepo,
) -> Result<(RepoRef, u64), AppError> {
    if let Some(path) = arg.strip_prefix(DISCUSSION_URL_PREFIX) {
        let segments: Vec<&str> = path.split('/').collect();
        let [owner, name, "discussions", number] = segments.as_slice() else {
            return Err(AppError::Usage("invalid discussion URL format".to_string()));
        };
        let number = parse_number(number).ok_or_else(|| {
            AppError::Usage(format!("invalid discussion number in URL: {number}"))
        })?;
        let repo = RepoRef::new(*owner, *name)
            .map_err(|_| AppError::Usage("invalid discussion URL format".to_string()))?;
        return Ok((repo, number));
    }

    let number = parse_number(arg)
        .ok_or_else(|| AppError::Usage(format!("invalid discussion number: {arg}")))?;
    let repo = resolve_repo(repo_override, current)?;
    Ok((repo, number))
}

fn parse_number(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|number| *number > 0)
}
