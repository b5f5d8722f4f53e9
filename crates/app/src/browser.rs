use std::process::{Command, Stdio};

use discussion_core::types::RepoRef;
use tracing::debug;

pub trait Browser {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Launches `$BROWSER`, falling back to the platform's URL opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        eprintln!("Opening {url} in your browser.");
        let mut command = match std::env::var("BROWSER") {
            Ok(browser) if !browser.trim().is_empty() => {
                let mut command = Command::new(browser.trim());
                command.arg(url);
                command
            }
            _ => platform_opener(url),
        };
        debug!(?command, "launching browser");
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

pub enum DiscussionPage {
    List,
    Single(u64),
    New,
}

pub fn discussions_url(host: &str, repo: &RepoRef, page: DiscussionPage) -> String {
    let base = format!("https://{host}/{repo}/discussions");
    match page {
        DiscussionPage::List => base,
        DiscussionPage::Single(number) => format!("{base}/{number}"),
        DiscussionPage::New => format!("{base}/new"),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_discussion_urls() {
        let repo = RepoRef::new("cli", "cli").unwrap();
        assert_eq!(
            discussions_url("github.com", &repo, DiscussionPage::List),
            "https://github.com/cli/cli/discussions"
        );
        assert_eq!(
            discussions_url("github.com", &repo, DiscussionPage::Single(12)),
            "https://github.com/cli/cli/discussions/12"
        );
        assert_eq!(
            discussions_url("ghe.example.com", &repo, DiscussionPage::New),
            "https://ghe.example.com/cli/cli/discussions/new"
        );
    }
}
