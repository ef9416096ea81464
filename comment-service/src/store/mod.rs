/// Storage layer for comment-service
///
/// `ContentStore` is the seam between the business logic and the backing
/// store. `PgStore` (PostgreSQL via sqlx) backs deployments; `MemStore`
/// backs tests and local development.
use crate::error::Result;
use crate::models::{Comment, Item};
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemStore;
pub use postgres::PgStore;

/// Trait defining the store operations the comment endpoints need.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Store connectivity check for health reporting
    async fn ping(&self) -> Result<()>;

    /// Look up an item by id
    async fn find_item(&self, item_id: Uuid) -> Result<Option<Item>>;

    /// Persist a new comment under an existing item. Atomic: on any failure
    /// nothing is written.
    async fn create_comment(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        author_name: &str,
        body: &str,
    ) -> Result<Comment>;

    /// All comments for an item in insertion order (newest last)
    async fn comments_for_item(&self, item_id: Uuid) -> Result<Vec<Comment>>;

    /// Total comment count for an item
    async fn comment_count(&self, item_id: Uuid) -> Result<i64>;
}
