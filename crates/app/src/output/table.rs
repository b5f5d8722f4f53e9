use std::io::Write;

use chrono::{DateTime, Utc};
use comfy_table::Table;
use comfy_table::presets::NOTHING;
use discussion_core::domain::{Comment, Discussion};

use crate::output::RenderError;
use crate::output::time::{format_relative, truncate};

const TITLE_WIDTH: usize = 50;
const HEADER: [&str; 7] = [
    "NUMBER", "TITLE", "AUTHOR", "CATEGORY", "ANSWERED", "COMMENTS", "UPDATED",
];

pub fn write_list<W: Write>(
    writer: &mut W,
    discussions: &[Discussion],
    now: DateTime<Utc>,
) -> Result<(), RenderError> {
    if discussions.is_empty() {
        writeln!(writer, "No discussions found")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(HEADER);
    for discussion in discussions {
        table.add_row(vec![
            discussion.number.to_string(),
            truncate(&discussion.title, TITLE_WIDTH),
            discussion
                .author
                .as_ref()
                .map(|author| author.login.clone())
                .unwrap_or_default(),
            discussion
                .category
                .as_ref()
                .map(|category| category.name.clone())
                .unwrap_or_default(),
            if discussion.answered() { "Yes" } else { "No" }.to_string(),
            discussion.comment_count().to_string(),
            format_relative(discussion.updated_at, now),
        ]);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    for line in table.lines() {
        writeln!(writer, "{}", line.trim_end())?;
    }
    Ok(())
}

pub fn write_detail<W: Write>(
    writer: &mut W,
    discussion: &Discussion,
    now: DateTime<Utc>,
) -> Result<(), RenderError> {
    writeln!(writer, "Discussion #{}", discussion.number)?;
    writeln!(writer, "Title: {}", discussion.title)?;
    if let Some(author) = &discussion.author {
        writeln!(writer, "Author: {}", author.login)?;
    }
    if let Some(category) = &discussion.category {
        writeln!(writer, "Category: {}", category.name)?;
    }
    if let Some(name) = discussion
        .repository
        .as_ref()
        .and_then(|repo| repo.name_with_owner.as_deref())
    {
        writeln!(writer, "Repository: {name}")?;
    }
    writeln!(writer, "Created: {}", format_relative(discussion.created_at, now))?;
    writeln!(writer, "Updated: {}", format_relative(discussion.updated_at, now))?;
    writeln!(writer, "Answered: {}", discussion.answered())?;
    if let Some(comments) = &discussion.comments {
        writeln!(writer, "Comments: {}", comments.total_count.unwrap_or(0))?;
    }
    writeln!(writer, "URL: {}", discussion.url)?;
    let labels = discussion.label_names();
    if !labels.is_empty() {
        writeln!(writer, "Labels: {}", labels.join(", "))?;
    }

    if let Some(body) = discussion.body.as_deref().filter(|body| !body.is_empty()) {
        write!(writer, "\n{body}\n")?;
    }

    let Some(comments) = discussion.comments.as_ref().filter(|c| !c.nodes.is_empty()) else {
        return Ok(());
    };
    write!(writer, "\n--- Comments ---\n")?;
    for (idx, comment) in comments.nodes.iter().enumerate() {
        writeln!(writer)?;
        let answer = if comment.is_answer() { " (Answer)" } else { "" };
        writeln!(writer, "Comment #{}{answer}", idx + 1)?;
        write_comment_body(writer, comment, 0, now)?;
        if let Some(replies) = &comment.replies {
            for (reply_idx, reply) in replies.nodes.iter().enumerate() {
                writeln!(writer)?;
                writeln!(writer, "{}Reply #{}", indent(1), reply_idx + 1)?;
                write_comment_body(writer, reply, 1, now)?;
            }
        }
    }
    Ok(())
}

fn write_comment_body<W: Write>(
    writer: &mut W,
    comment: &Comment,
    depth: usize,
    now: DateTime<Utc>,
) -> Result<(), RenderError> {
    let pad = indent(depth);
    if let Some(author) = &comment.author {
        writeln!(writer, "{pad}Author: {}", author.login)?;
    }
    writeln!(writer, "{pad}Created: {}", format_relative(comment.created_at, now))?;
    writeln!(writer)?;
    for line in comment.body_or_empty().lines() {
        if line.is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, "{pad}{line}")?;
        }
    }
    if comment.body_or_empty().is_empty() {
        writeln!(writer)?;
    }
    Ok(())
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
