/// HTTP handlers for comment endpoints
///
/// - Comments: create a comment on an item, list an item's comments
/// - Health: service/store health reporting
pub mod comments;
pub mod health;

pub use comments::{create_comment, get_item_comments, ResponseFormat};
pub use health::health_summary;
