/// Data models for comment-service
///
/// This module defines structures for:
/// - Item: the parent resource a comment belongs to
/// - Comment: a comment attached to an item
/// - CreateCommentRequest: inbound payload for comment creation
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Parent resource a comment is attached to.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A comment on an item. Created once per successful submission and never
/// mutated afterwards; `author_name` is denormalized at creation time so the
/// fragment renderer does not need a user lookup.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub item_id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a comment.
///
/// Only `comment.body` is a permitted field; anything else the client
/// submits is dropped during deserialization and never reaches the store.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: CommentPayload,
}

/// The permitted comment fields.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentPayload {
    #[validate(length(
        max = 4000,
        message = "comment body must be at most 4000 characters"
    ))]
    pub body: String,
}
