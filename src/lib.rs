pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::order_service::{AppOrderService, OrderService};
use crate::domain::ports::DynOrderRepository;
use crate::errors::AppError;
use crate::infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbError, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::ping,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
    ),
    components(schemas(
        handlers::dto::CreateOrderRequest,
        handlers::dto::CreateItemRequest,
        handlers::dto::UpdateOrderRequest,
        handlers::dto::UpdateItemRequest,
        handlers::dto::OrderResponse,
        handlers::dto::ItemResponse,
        handlers::dto::ListOrdersResponse,
        handlers::dto::OrderIdResponse,
        errors::ErrorResponse,
    )),
    tags(
        (name = "orders", description = "Order management"),
        (name = "health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Migration(e.to_string()))?;
    log::info!("applied {} pending migrations", applied.len());
    Ok(())
}

/// Registers the `/api/v1` routes. Expects `web::Data<AppOrderService>` in
/// the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("rejected order payload: {}", err);
        AppError::BadRequest("invalid json format".to_string()).into()
    });

    cfg.app_data(json_config).service(
        web::scope("/api/v1")
            .wrap(from_fn(handlers::middleware::require_json))
            .route("/ping", web::get().to(handlers::health::ping))
            .service(
                web::resource("/orders")
                    .route(web::get().to(handlers::orders::list_orders))
                    .route(web::post().to(handlers::orders::create_order)),
            )
            .service(
                web::resource("/orders/{orderID}")
                    .route(web::get().to(handlers::orders::get_order))
                    .route(web::put().to(handlers::orders::update_order))
                    .route(web::patch().to(handlers::orders::update_order))
                    .route(web::delete().to(handlers::orders::delete_order)),
            ),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The pool is owned by the repository behind the shared service and is
/// dropped once the server has stopped and released its workers.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let repo: DynOrderRepository = Box::new(DieselOrderRepository::new(pool));
    let service: web::Data<AppOrderService> = web::Data::new(OrderService::new(repo));
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
