use std::process::Command;

use discussion_core::types::RepoRef;
use tracing::debug;

/// Supplies the repository a command targets when `-R` is absent.
pub trait CurrentRepo {
    fn current_repo(&self) -> Option<RepoRef>;
}

/// Reads the `origin` remote of the git checkout in the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRemoteRepo;

impl CurrentRepo for GitRemoteRepo {
    fn current_repo(&self) -> Option<RepoRef> {
        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .output()
            .inspect_err(|err| debug!(error = %err, "git executable unavailable"))
            .ok()?;
        if !output.status.success() {
            debug!(status = %output.status, "no origin remote");
            return None;
        }
        let url = String::from_utf8(output.stdout).ok()?;
        parse_remote_url(url.trim())
    }
}

/// Accepts `https://HOST/O/R`, `git@HOST:O/R` and `ssh://git@HOST/O/R`, each with an optional `.git`.
pub fn parse_remote_url(url: &str) -> Option<RepoRef> {
    let path = if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("ssh://"))
    {
        rest.split_once('/')?.1
    } else if let Some(rest) = url.strip_prefix("git@") {
        rest.split_once(':')?.1
    } else {
        return None;
    };
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    RepoRef::try_from(path).ok()
}

#[cfg(test)]
pub(crate) struct FixedRepo(pub Option<RepoRef>);

#[cfg(test)]
impl CurrentRepo for FixedRepo {
    fn current_repo(&self) -> Option<RepoRef> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::parse_remote_url;

    fn parsed(url: &str) -> Option<String> {
        parse_remote_url(url).map(|repo| repo.to_string())
    }

    #[test]
    fn https_remotes() {
        assert_eq!(parsed("https://github.com/cli/cli.git").as_deref(), Some("cli/cli"));
        assert_eq!(parsed("https://github.com/cli/cli").as_deref(), Some("cli/cli"));
        assert_eq!(
            parsed("https://ghe.example.com/team/tool/").as_deref(),
            Some("team/tool")
        );
    }

    #[test]
    fn ssh_remotes() {
        assert_eq!(parsed("git@github.com:cli/cli.git").as_deref(), Some("cli/cli"));
        assert_eq!(
            parsed("ssh://git@github.com/cli/cli.git").as_deref(),
            Some("cli/cli")
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parsed("/srv/git/cli.git"), None);
        assert_eq!(parsed("https://github.com/cli"), None);
        assert_eq!(parsed("https://github.com/cli/cli/tree/main"), None);
    }
}
