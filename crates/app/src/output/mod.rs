pub mod json;
pub mod table;
pub mod template;
pub mod time;

use std::io::Write;

use chrono::{DateTime, Utc};
use discussion_core::domain::Discussion;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse template: {0}")]
    Template(String),
    #[error("{0}")]
    Execute(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Template,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub fields: Vec<String>,
    pub template: Option<String>,
}

impl OutputOptions {
    /// `--json true` and `--json 1` select every field.
    pub fn from_flags(json: Option<&str>, template: Option<&str>) -> Self {
        if let Some(json) = json.filter(|value| !value.is_empty()) {
            let fields = if json == "true" || json == "1" {
                Vec::new()
            } else {
                parse_json_fields(json)
            };
            return Self {
                format: OutputFormat::Json,
                fields,
                template: None,
            };
        }
        if let Some(template) = template.filter(|value| !value.is_empty()) {
            return Self {
                format: OutputFormat::Template,
                fields: Vec::new(),
                template: Some(template.to_string()),
            };
        }
        Self::default()
    }
}

pub fn parse_json_fields(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders domain values onto a borrowed writer.
pub struct Formatter<'a, W: Write> {
    writer: &'a mut W,
    opts: OutputOptions,
    now: DateTime<Utc>,
}

impl<'a, W: Write> Formatter<'a, W> {
    pub fn new(writer: &'a mut W, opts: OutputOptions) -> Self {
        Self {
            writer,
            opts,
            now: Utc::now(),
        }
    }

    /// Pins the clock used for relative timestamps.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn format_discussion_list(&mut self, discussions: &[Discussion]) -> Result<(), RenderError> {
        match self.opts.format {
            OutputFormat::Json => json::write_json(&mut *self.writer, discussions, &self.opts.fields),
            OutputFormat::Template => {
                let source = self.opts.template.as_deref().unwrap_or_default();
                template::render(&mut *self.writer, source, discussions)
            }
            OutputFormat::Table => table::write_list(&mut *self.writer, discussions, self.now),
        }
    }

    pub fn format_discussion(&mut self, discussion: &Discussion) -> Result<(), RenderError> {
        match self.opts.format {
            OutputFormat::Json => json::write_json(&mut *self.writer, discussion, &self.opts.fields),
            OutputFormat::Template => {
                let source = self.opts.template.as_deref().unwrap_or_default();
                template::render(&mut *self.writer, source, discussion)
            }
            OutputFormat::Table => table::write_detail(&mut *self.writer, discussion, self.now),
        }
    }
}
