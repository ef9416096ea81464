/// In-memory store, used by tests and local development
use crate::error::{AppError, Result};
use crate::models::{Comment, Item};
use crate::store::ContentStore;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// HashMap-backed implementation of [`ContentStore`].
///
/// Comments live in a single Vec in insertion order, which is also the
/// display order.
#[derive(Default)]
pub struct MemStore {
    items: RwLock<HashMap<Uuid, Item>>,
    comments: RwLock<Vec<Comment>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, used for seeding.
    pub async fn insert_item(&self, title: &str) -> Item {
        let item = Item {
            id: Uuid::new_v4(),
            title: title.to_string(),
            created_at: Utc::now(),
        };
        self.items.write().await.insert(item.id, item.clone());
        item
    }
}

#[async_trait::async_trait]
impl ContentStore for MemStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn find_item(&self, item_id: Uuid) -> Result<Option<Item>> {
        Ok(self.items.read().await.get(&item_id).cloned())
    }

    async fn create_comment(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        author_name: &str,
        body: &str,
    ) -> Result<Comment> {
        if !self.items.read().await.contains_key(&item_id) {
            return Err(AppError::NotFound(format!("item {item_id} not found")));
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            item_id,
            user_id,
            author_name: author_name.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        };
        self.comments.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn comments_for_item(&self, item_id: Uuid) -> Result<Vec<Comment>> {
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.item_id == item_id)
            .cloned()
            .collect())
    }

    async fn comment_count(&self, item_id: Uuid) -> Result<i64> {
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.item_id == item_id)
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_requires_existing_item() {
        let store = MemStore::new();
        let result = store
            .create_comment(Uuid::new_v4(), Uuid::new_v4(), "alice", "hi")
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.comments.read().await.is_empty());
    }

    #[tokio::test]
    async fn comments_come_back_in_insertion_order() {
        let store = MemStore::new();
        let item = store.insert_item("first item").await;
        let user = Uuid::new_v4();

        store.create_comment(item.id, user, "alice", "one").await.unwrap();
        store.create_comment(item.id, user, "alice", "two").await.unwrap();
        store.create_comment(item.id, user, "bob", "three").await.unwrap();

        let comments = store.comments_for_item(item.id).await.unwrap();
        let bodies: Vec<_> = comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["one", "two", "three"]);
        assert_eq!(store.comment_count(item.id).await.unwrap(), 3);
    }
}
