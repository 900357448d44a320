use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A stored post row.
pub struct Post {
    /// Identifier assigned by the database.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Creation timestamp assigned by the database (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Partial update for an existing post.
///
/// `None` fields are omitted from the request body and left untouched by the
/// database; the same shape drives in-memory merges on the application side.
pub struct PostPatch {
    /// Replacement title, if it changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement content, if it changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
