//! 产品存储网关
//!
//! 处理器只依赖这个 trait，具体实现见 `infrastructure` 下的 MongoDB 和内存版本。

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson};
use thiserror::Error;

use super::model::{Product, ProductFields};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("insert returned a non-ObjectId identifier: {0}")]
    InvalidInsertedId(Bson),
}

/// 更新结果，`matched` 表示是否有文档命中过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 按存储原生顺序返回全部产品
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, StoreError>;

    /// 插入新文档，返回存储层生成的 ID
    async fn insert(&self, fields: ProductFields) -> Result<ObjectId, StoreError>;

    /// 用 `fields` 覆盖匹配文档的全部字段，不存在时不会创建
    async fn update(&self, id: ObjectId, fields: ProductFields) -> Result<UpdateOutcome, StoreError>;

    /// 删除匹配文档，返回删除数量
    async fn delete(&self, id: ObjectId) -> Result<u64, StoreError>;
}
