use discussion_core::domain::{ListOptions, RangeSearch};

/// Builds the search-endpoint expression for a list request.
///
/// Token order: repo, free text, author, category, answered state, labels.
pub fn search_expression(opts: &ListOptions) -> String {
    let mut parts = Vec::new();
    if !opts.owner.is_empty() && !opts.repo.is_empty() {
        parts.push(format!("repo:{}/{}", opts.owner, opts.repo));
    }
    if let Some(search) = opts.search() {
        parts.push(search.to_string());
    }
    if let Some(author) = opts.author() {
        parts.push(format!("author:{author}"));
    }
    if let Some(category) = opts.category() {
        parts.push(format!("category:\"{category}\""));
    }
    match opts.answered {
        Some(true) => parts.push("is:answered".to_string()),
        Some(false) => parts.push("is:unanswered".to_string()),
        None => {}
    }
    for label in opts.labels.iter().filter(|label| !label.is_empty()) {
        parts.push(format!("label:\"{label}\""));
    }
    parts.join(" ")
}

/// Builds the expression for a date-bounded search: range, author, repo, keywords.
pub fn range_expression(search: &RangeSearch) -> String {
    let mut parts = Vec::new();
    if let Some(created) = search.range.to_qualifier() {
        parts.push(created);
    }
    if let Some(author) = search.author.as_deref().filter(|author| !author.is_empty()) {
        parts.push(format!("author:{author}"));
    }
    if let Some(repo) = search.repo.as_ref() {
        parts.push(format!("repo:{repo}"));
    }
    for keyword in &search.keywords {
        let keyword = keyword.trim();
        if !keyword.is_empty() {
            parts.push(keyword.to_string());
        }
    }
    parts.join(" ")
}
