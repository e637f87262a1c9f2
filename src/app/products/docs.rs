//! OpenAPI 文档

use axum::Json;
use utoipa::OpenApi;

use super::{
    dto::{CreateProductDto, UpdateProductDto},
    handler,
    model::Product,
};
use crate::core::response::{MessageResponse, ProductListResponse, ProductResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product's CRUD API",
        version = "1.0",
        description = "CRUD API for managing products."
    ),
    paths(
        handler::list_products,
        handler::get_product,
        handler::create_product,
        handler::update_product,
        handler::delete_product
    ),
    components(schemas(
        Product,
        CreateProductDto,
        UpdateProductDto,
        ProductListResponse,
        ProductResponse,
        MessageResponse
    )),
    tags((name = "products", description = "Product management"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_product_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/products"));
        assert!(paths.contains_key("/products/{id}"));
        assert_eq!(paths.len(), 2);
    }
}
