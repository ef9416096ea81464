/// Comment service - comment creation and retrieval against a store
use crate::auth::CurrentUser;
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentPayload, Item};
use crate::store::ContentStore;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct CommentService {
    store: Arc<dyn ContentStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Create a comment on an item.
    ///
    /// Lifecycle: resolve parent, validate the permitted fields, persist
    /// with the owner taken from the authenticated caller, then return the
    /// comment together with the item's new comment total. The owning user
    /// always comes from `user`; client-supplied identity never reaches
    /// this point.
    pub async fn create_comment(
        &self,
        item_id: Uuid,
        user: &CurrentUser,
        payload: &CommentPayload,
    ) -> Result<(Comment, i64)> {
        let item = self.resolve_item(item_id).await?;

        payload.validate()?;
        if payload.body.trim().is_empty() {
            return Err(AppError::Validation(
                "comment body must not be empty".to_string(),
            ));
        }

        let comment = self
            .store
            .create_comment(item.id, user.id, &user.name, &payload.body)
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            item_id = %item.id,
            user_id = %user.id,
            "comment created"
        );

        let count = self.store.comment_count(item.id).await?;
        Ok((comment, count))
    }

    /// All comments for an item, oldest first.
    pub async fn comments_for_item(&self, item_id: Uuid) -> Result<Vec<Comment>> {
        let item = self.resolve_item(item_id).await?;
        self.store.comments_for_item(item.id).await
    }

    async fn resolve_item(&self, item_id: Uuid) -> Result<Item> {
        self.store
            .find_item(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("item {item_id} not found")))
    }
}
