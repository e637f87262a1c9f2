//! 自定义提取器
//!
//! 提取失败统一转成 [`CoreError`]，保证 400 响应也是标准信封。
//! axum 按参数顺序运行提取器，路径参数放在请求体之前即可先校验 ID。

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::error::CoreError;

/// 路径中的 `{id}`，必须是合法的 ObjectId
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "missing product id");
                CoreError::InvalidProductId
            })?;

        ObjectId::parse_str(&raw)
            .map(ProductId)
            .map_err(|err| {
                debug!(id = %raw, error = %err, "rejected product id");
                CoreError::InvalidProductId
            })
    }
}

/// 解析 JSON 请求体并执行 `validator` 规则
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "rejected request body");
                CoreError::InvalidRequestBody
            })?;

        value.validate().map_err(|errors| {
            debug!(%errors, "request body failed validation");
            CoreError::InvalidRequestBody
        })?;

        Ok(Self(value))
    }
}
