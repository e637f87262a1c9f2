//! 核心响应处理模块
//!
//! 所有响应体都是 `{statusCode, message, data?}` 信封，状态码与提示文案集中在这里。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app::products::model::Product;

pub const PRODUCTS_FETCHED: &str = "Products fetched successfully";
pub const PRODUCT_FETCHED: &str = "Product fetched successfully";
pub const PRODUCT_CREATED: &str = "Product created successfully";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";

/// 产品列表响应
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    #[schema(example = "Products fetched successfully")]
    pub message: String,
    pub data: Vec<Product>,
}

/// 单个产品响应
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    #[schema(example = "Product fetched successfully")]
    pub message: String,
    pub data: Product,
}

/// 只有状态码和提示信息的响应，错误响应也使用这个结构
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub status_code: u16,
    pub message: String,
}

impl ProductListResponse {
    pub fn fetched(products: Vec<Product>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            message: PRODUCTS_FETCHED.to_string(),
            data: products,
        }
    }
}

impl ProductResponse {
    pub fn fetched(product: Product) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            message: PRODUCT_FETCHED.to_string(),
            data: product,
        }
    }
}

impl MessageResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// 按信封里的 statusCode 设置 HTTP 状态并序列化为 JSON
fn respond<B: Serialize>(status_code: u16, body: B) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

impl IntoResponse for ProductListResponse {
    fn into_response(self) -> Response {
        respond(self.status_code, self)
    }
}

impl IntoResponse for ProductResponse {
    fn into_response(self) -> Response {
        respond(self.status_code, self)
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        respond(self.status_code, self)
    }
}
