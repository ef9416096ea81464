/// Business logic layer
pub mod comments;

pub use comments::CommentService;
