//! Discussion entities as they appear on the GraphQL wire.
//!
//! Field names serialize to the forge's schema names. Absent optional fields
//! serialize as `null`, so every schema key exists for templates and the JSON
//! projector. A user's `id`, `avatarUrl`, `name` and `email` are left out
//! unless the server sent them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub body_text: Option<String>,
    #[serde(rename = "bodyHTML")]
    pub body_html: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub last_edited_at: Option<DateTime<Utc>>,
    pub author: Option<User>,
    pub category: Option<Category>,
    pub repository: Option<Repository>,
    pub url: String,
    pub resource_path: Option<String>,
    pub locked: Option<bool>,
    pub active_lock_reason: Option<String>,
    pub answer_chosen_at: Option<DateTime<Utc>>,
    pub answer_chosen_by: Option<User>,
    pub answer: Option<Box<Comment>>,
    pub is_answered: Option<bool>,
    pub upvote_count: Option<u64>,
    pub reaction_groups: Option<Vec<ReactionGroup>>,
    pub author_association: Option<String>,
    /// Only populated when comments were requested.
    pub comments: Option<Connection<Comment>>,
    pub labels: Option<Connection<Label>>,
    pub viewer_can_delete: Option<bool>,
    pub viewer_can_react: Option<bool>,
    pub viewer_can_subscribe: Option<bool>,
    pub viewer_can_update: Option<bool>,
    pub viewer_did_author: Option<bool>,
    pub viewer_subscription: Option<String>,
    pub created_via_email: Option<bool>,
    pub database_id: Option<u64>,
    pub editor: Option<User>,
    pub includes_created_edit: Option<bool>,
}

impl Discussion {
    pub fn answered(&self) -> bool {
        self.is_answered.unwrap_or(false)
    }

    pub fn comment_count(&self) -> u64 {
        self.comments
            .as_ref()
            .and_then(|comments| comments.total_count)
            .unwrap_or(0)
    }

    pub fn label_names(&self) -> Vec<&str> {
        self.labels
            .as_ref()
            .map(|labels| labels.nodes.iter().map(|label| label.name.as_str()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub body: Option<String>,
    pub body_text: Option<String>,
    #[serde(rename = "bodyHTML")]
    pub body_html: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<User>,
    pub author_association: Option<String>,
    pub upvote_count: Option<u64>,
    pub is_answer: Option<bool>,
    pub is_minimized: Option<bool>,
    pub minimized_reason: Option<String>,
    pub reaction_groups: Option<Vec<ReactionGroup>>,
    pub replies: Option<Connection<Comment>>,
    pub reply_to: Option<Box<Comment>>,
    pub url: Option<String>,
    pub viewer_can_mark_as_answer: Option<bool>,
    pub viewer_can_unmark_as_answer: Option<bool>,
}

impl Comment {
    pub fn is_answer(&self) -> bool {
        self.is_answer.unwrap_or(false)
    }

    pub fn body_or_empty(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub emoji: Option<String>,
    #[serde(rename = "emojiHTML")]
    pub emoji_html: Option<String>,
    pub is_answerable: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Repository {
    pub id: Option<String>,
    pub name: Option<String>,
    pub name_with_owner: Option<String>,
    pub owner: Option<User>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionGroup {
    pub content: String,
    pub users: ReactionUsers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionUsers {
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// A page of `T` in forge document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: None,
            total_count: None,
        }
    }
}

impl<T> Connection<T> {
    pub fn has_next_page(&self) -> bool {
        self.page_info
            .as_ref()
            .is_some_and(|info| info.has_next_page)
    }

    pub fn end_cursor(&self) -> Option<&str> {
        self.page_info
            .as_ref()
            .and_then(|info| info.end_cursor.as_deref())
    }
}
