/// Comment handlers - HTTP endpoints for comment operations
use crate::auth::CurrentUser;
use crate::error::Result;
use crate::models::CreateCommentRequest;
use crate::render;
use crate::services::CommentService;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

/// How the caller wants the create response delivered.
///
/// The set is closed and the dispatch explicit: a conventional navigation
/// gets a redirect back to the item page, an asynchronous submission gets
/// the script fragment that patches the page in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    FullPageRedirect,
    FragmentAppend,
}

impl ResponseFormat {
    /// Negotiate the format from the request's Accept header. A javascript
    /// media type with a zero q-value counts as refused, not requested.
    pub fn from_request(req: &HttpRequest) -> Self {
        let accept = req
            .headers()
            .get(header::ACCEPT)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");

        for entry in accept.split(',') {
            let mut parts = entry.split(';');
            let media_type = parts.next().unwrap_or("").trim();
            if !matches!(media_type, "text/javascript" | "application/javascript") {
                continue;
            }
            let q = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .next()
                .and_then(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if q > 0.0 {
                return ResponseFormat::FragmentAppend;
            }
        }
        ResponseFormat::FullPageRedirect
    }
}

/// Create a new comment on an item.
///
/// The owner is the authenticated caller; the payload contributes only the
/// comment body. Responds with a 303 back to the item page or with a
/// `text/javascript` fragment update, per the negotiated format.
pub async fn create_comment(
    req: HttpRequest,
    service: web::Data<CommentService>,
    item_id: web::Path<Uuid>,
    user: CurrentUser,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let item_id = item_id.into_inner();
    let (comment, count) = service
        .create_comment(item_id, &user, &payload.comment)
        .await?;

    match ResponseFormat::from_request(&req) {
        ResponseFormat::FullPageRedirect => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("/items/{item_id}")))
            .finish()),
        ResponseFormat::FragmentAppend => Ok(HttpResponse::Ok()
            .content_type("text/javascript; charset=utf-8")
            .body(render::fragment_script(&comment, count))),
    }
}

/// Get the comments for an item, oldest first.
pub async fn get_item_comments(
    service: web::Data<CommentService>,
    item_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let comments = service.comments_for_item(item_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn accept_javascript_selects_fragment() {
        for accept in [
            "text/javascript",
            "application/javascript, */*; q=0.1",
            "text/javascript; charset=utf-8",
        ] {
            let req = TestRequest::default()
                .insert_header((header::ACCEPT, accept))
                .to_http_request();
            assert_eq!(
                ResponseFormat::from_request(&req),
                ResponseFormat::FragmentAppend,
                "{accept}"
            );
        }
    }

    #[test]
    fn zero_q_javascript_is_not_a_fragment_request() {
        for accept in [
            "text/javascript;q=0",
            "text/html, application/javascript; q=0.0",
            "text/javascript; charset=utf-8; q=0",
        ] {
            let req = TestRequest::default()
                .insert_header((header::ACCEPT, accept))
                .to_http_request();
            assert_eq!(
                ResponseFormat::from_request(&req),
                ResponseFormat::FullPageRedirect,
                "{accept}"
            );
        }
    }

    #[test]
    fn html_and_absent_accept_select_redirect() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT, "text/html,application/xhtml+xml"))
            .to_http_request();
        assert_eq!(
            ResponseFormat::from_request(&req),
            ResponseFormat::FullPageRedirect
        );

        let req = TestRequest::default().to_http_request();
        assert_eq!(
            ResponseFormat::from_request(&req),
            ResponseFormat::FullPageRedirect
        );
    }
}
