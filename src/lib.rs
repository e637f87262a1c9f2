//! # 产品 CRUD 服务
//!
//! 基于 Axum 和 MongoDB 的产品管理接口，按分层组织：
//! - `app`：产品模型、DTO、存储网关和处理器
//! - `core`：错误、响应信封、提取器、中间件
//! - `infrastructure`：配置、日志、数据库连接和存储实现

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::products::{self, docs::openapi_json, handler::AppState};
use crate::core::middleware::request_logging_middleware;

/// 组装完整的路由和中间件
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(products::routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
