/// Comment Service Library
///
/// Handles the comment endpoints for items: creating a comment against a
/// parent item and listing an item's comments. Comment creation answers
/// either with a full-page redirect back to the item or with a script
/// fragment that updates an already-loaded page in place.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and response-format dispatch
/// - `models`: Data structures for items and comments
/// - `services`: Business logic layer
/// - `store`: Storage trait plus PostgreSQL and in-memory backends
/// - `render`: Comment fragment rendering and escaping
/// - `auth`: Current-user extraction from bearer/session credentials
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
