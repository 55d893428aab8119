use actix_web::{web, HttpResponse};

use crate::application::order_service::AppOrderService;
use crate::errors::{AppError, ErrorResponse};
use crate::handlers::dto::{
    CreateOrderRequest, ListOrdersResponse, OrderIdResponse, OrderResponse, UpdateOrderRequest,
};

/// Parses the `{orderID}` path segment, which must be a positive integer.
pub fn parse_order_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("invalid order id '{}'", raw))),
    }
}

fn rejected(err: impl Into<AppError>) -> AppError {
    let err = err.into();
    log::warn!("rejected order payload: {}", err);
    err
}

/// GET /api/v1/orders
///
/// Returns every live order with its items.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "All orders", body = ListOrdersResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<AppOrderService>) -> Result<HttpResponse, AppError> {
    let result = web::block(move || service.list_orders()).await??;

    let orders: Vec<OrderResponse> = result.orders.iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        count: result.count,
        orders,
    }))
}

/// GET /api/v1/orders/{orderID}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{orderID}",
    params(
        ("orderID" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Invalid order id", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = parse_order_id(&path)?;

    let order = web::block(move || service.get_order(order_id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(&order)))
}

/// POST /api/v1/orders
///
/// Creates an order together with its items. The order row and the item rows
/// are written in one transaction.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderIdResponse),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let new_order = body.into_inner().into_new_order().map_err(rejected)?;

    let order_id = web::block(move || service.create_order(new_order)).await??;
    log::info!("created order {}", order_id);

    Ok(HttpResponse::Ok().json(OrderIdResponse {
        success: true,
        order_id,
    }))
}

/// PUT|PATCH /api/v1/orders/{orderID}
///
/// Replaces the order's fields and its entire item set.
#[utoipa::path(
    put,
    path = "/api/v1/orders/{orderID}",
    params(
        ("orderID" = i32, Path, description = "Order id"),
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = parse_order_id(&path)?;
    let new_order = body.into_inner().into_new_order().map_err(rejected)?;

    let order = web::block(move || service.update_order(order_id, new_order)).await??;
    log::info!("updated order {}", order_id);

    Ok(HttpResponse::Ok().json(OrderResponse::updated(&order)))
}

/// DELETE /api/v1/orders/{orderID}
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{orderID}",
    params(
        ("orderID" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order deleted", body = OrderIdResponse),
        (status = 400, description = "Invalid order id", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = parse_order_id(&path)?;

    let deleted = web::block(move || service.delete_order(order_id)).await??;
    log::info!("deleted order {}", deleted);

    Ok(HttpResponse::Ok().json(OrderIdResponse {
        success: true,
        order_id: deleted,
    }))
}
