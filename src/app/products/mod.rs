//! 产品 CRUD：模型、DTO、存储网关、处理器和路由

pub mod docs;
pub mod dto;
pub mod handler;
pub mod model;
pub mod store;

use axum::{routing::get, Router};

use handler::{create_product, delete_product, get_product, list_products, update_product, AppState};

/// 产品路由表
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
