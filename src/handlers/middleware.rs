use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::Method;
use actix_web::middleware::Next;
use actix_web::ResponseError;

use crate::errors::AppError;

const ACCEPTED_CONTENT_TYPE: &str = "application/json";

/// Rejects body-carrying requests whose media type is not JSON before they
/// reach a handler.
pub async fn require_json<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    if carries_body(req.method()) && !is_json(req.headers()) {
        log::warn!(
            "rejected {} {}: invalid content type",
            req.method(),
            req.path()
        );
        let err = AppError::BadRequest("invalid content type".to_string());
        return Ok(req
            .into_response(err.error_response())
            .map_into_right_body());
    }
    next.call(req).await.map(ServiceResponse::map_into_left_body)
}

fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(ACCEPTED_CONTENT_TYPE))
}
