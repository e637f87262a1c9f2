//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;
use tracing::error;

use super::response::MessageResponse;
use crate::app::products::store::StoreError;

/// 出错时正在执行的存储操作，决定返回给调用方的提示文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    FetchProducts,
    FetchProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StorageOperation::FetchProducts => "Failed to fetch products",
            StorageOperation::FetchProduct => "Failed to fetch product",
            StorageOperation::CreateProduct => "Failed to create product",
            StorageOperation::UpdateProduct => "Failed to update product",
            StorageOperation::DeleteProduct => "Failed to delete product",
        };
        f.write_str(message)
    }
}

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid product ID")]
    InvalidProductId,

    #[error("Invalid request body data")]
    InvalidRequestBody,

    #[error("Product not found")]
    ProductNotFound,

    #[error("{operation}")]
    Storage {
        operation: StorageOperation,
        #[source]
        source: StoreError,
    },
}

impl CoreError {
    /// 包装存储层错误，供 `map_err` 使用
    pub fn storage(operation: StorageOperation) -> impl FnOnce(StoreError) -> Self {
        move |source| CoreError::Storage { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::InvalidProductId | CoreError::InvalidRequestBody => StatusCode::BAD_REQUEST,
            CoreError::ProductNotFound => StatusCode::NOT_FOUND,
            CoreError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        // 存储层的细节只写日志，不返回给调用方
        if let CoreError::Storage { operation, source } = &self {
            error!(operation = ?operation, error = %source, "storage operation failed");
        }

        MessageResponse::new(self.status_code(), self.to_string()).into_response()
    }
}
