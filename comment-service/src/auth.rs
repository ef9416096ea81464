/// Current-user extraction for comment-service
///
/// Credentials are HS256 session tokens carried either as a bearer
/// `Authorization` header or a `session` cookie. The authenticated identity
/// is threaded into handlers as an explicit `CurrentUser` parameter; any
/// missing or invalid credential resolves to a redirect to the sign-in page
/// before the handler body runs.
use crate::config::AuthSettings;
use crate::error::AppError;
use actix_web::{web, Error, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Session token claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Display name, used when rendering the comment fragment
    pub name: String,
    /// Expiry (seconds since epoch)
    pub exp: usize,
}

/// The authenticated caller for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
}

/// Issue a session token for a user. Used by the sign-in collaborator and
/// by tests.
pub fn issue_token(
    settings: &AuthSettings,
    user_id: Uuid,
    name: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        exp: (Utc::now() + ttl).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
}

fn token_from_request(req: &HttpRequest) -> Option<String> {
    if let Some(header) = req.headers().get("Authorization") {
        if let Ok(value) = header.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }
    req.cookie("session").map(|c| c.value().to_string())
}

fn resolve_user(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    let settings = req
        .app_data::<web::Data<AuthSettings>>()
        .ok_or_else(|| AppError::Internal("auth settings not configured".to_string()))?;

    let unauthorized = || AppError::Unauthorized {
        redirect_to: settings.signin_path.clone(),
    };

    let token = token_from_request(req).ok_or_else(unauthorized)?;

    let data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| unauthorized())?;

    let id = Uuid::parse_str(&data.claims.sub).map_err(|_| unauthorized())?;

    Ok(CurrentUser {
        id,
        name: data.claims.name,
    })
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(resolve_user(req).map_err(Error::from))
    }
}
