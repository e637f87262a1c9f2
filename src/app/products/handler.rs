//! 产品处理器

use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::{
    dto::{CreateProductDto, UpdateProductDto},
    store::ProductStore,
};
use crate::core::{
    error::{CoreError, StorageOperation},
    extract::{ProductId, ValidatedJson},
    response::{
        MessageResponse, ProductListResponse, ProductResponse, PRODUCT_CREATED, PRODUCT_DELETED,
        PRODUCT_UPDATED,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub product_store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(product_store: Arc<dyn ProductStore>) -> Self {
        Self { product_store }
    }
}

/// 获取全部产品
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    operation_id = "get-all-products",
    responses(
        (status = 200, description = "Products fetched successfully", body = ProductListResponse),
        (status = 500, description = "Failed to fetch products", body = MessageResponse)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ProductListResponse, CoreError> {
    let products = state
        .product_store
        .find_all()
        .await
        .map_err(CoreError::storage(StorageOperation::FetchProducts))?;

    Ok(ProductListResponse::fetched(products))
}

/// 按 ID 获取产品
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    operation_id = "get-product-by-id",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product fetched successfully", body = ProductResponse),
        (status = 400, description = "Invalid product ID", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Failed to fetch product", body = MessageResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<ProductResponse, CoreError> {
    let product = state
        .product_store
        .find_by_id(id)
        .await
        .map_err(CoreError::storage(StorageOperation::FetchProduct))?
        .ok_or(CoreError::ProductNotFound)?;

    Ok(ProductResponse::fetched(product))
}

/// 创建产品，不返回新产品的 ID
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    operation_id = "create-product",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = MessageResponse),
        (status = 400, description = "Invalid request body data", body = MessageResponse),
        (status = 500, description = "Failed to create product", body = MessageResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<MessageResponse, CoreError> {
    let fields = dto.into_fields(Utc::now())?;

    let id = state
        .product_store
        .insert(fields)
        .await
        .map_err(CoreError::storage(StorageOperation::CreateProduct))?;

    info!(product_id = %id, "product created");
    Ok(MessageResponse::new(StatusCode::CREATED, PRODUCT_CREATED))
}

/// 整体更新产品
///
/// 没有命中任何文档时同样返回 200。
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    operation_id = "update-product",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid product ID or request body data", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Failed to update product", body = MessageResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ValidatedJson(dto): ValidatedJson<UpdateProductDto>,
) -> Result<MessageResponse, CoreError> {
    let outcome = state
        .product_store
        .update(id, dto.into())
        .await
        .map_err(CoreError::storage(StorageOperation::UpdateProduct))?;

    if !outcome.matched {
        warn!(product_id = %id, "update matched no product");
    }

    Ok(MessageResponse::new(StatusCode::OK, PRODUCT_UPDATED))
}

/// 按 ID 删除产品
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    operation_id = "delete-product-by-id",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid product ID", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Failed to delete product", body = MessageResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<MessageResponse, CoreError> {
    let deleted = state
        .product_store
        .delete(id)
        .await
        .map_err(CoreError::storage(StorageOperation::DeleteProduct))?;

    if deleted == 0 {
        return Err(CoreError::ProductNotFound);
    }

    Ok(MessageResponse::new(StatusCode::OK, PRODUCT_DELETED))
}
