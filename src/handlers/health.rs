use actix_web::HttpResponse;

/// GET /api/v1/ping
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    responses(
        (status = 200, description = "Service is alive", body = String),
    ),
    tag = "health"
)]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json("pong")
}
