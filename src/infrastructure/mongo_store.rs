//! MongoDB 产品存储
//!
//! 存储文档使用 `_id` 和 `register_date`（BSON 日期），与对外 JSON 字段名不同。

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use super::database::DatabaseManager;
use crate::app::products::{
    model::{Product, ProductFields},
    store::{ProductStore, StoreError, UpdateOutcome},
};

/// 集合中的完整文档，其他客户端写入的文档可能缺字段，缺失时取零值
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    weight: f64,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    price: f64,
    #[serde(
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime",
        default
    )]
    register_date: DateTime<Utc>,
}

/// 除 `_id` 外的字段，插入和 `$set` 共用
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldsDocument {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: String,
    weight: f64,
    #[serde(rename = "type")]
    kind: String,
    price: f64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    register_date: DateTime<Utc>,
}

impl From<ProductFields> for FieldsDocument {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            color: fields.color,
            weight: fields.weight,
            kind: fields.kind,
            price: fields.price,
            register_date: fields.register_date,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Product {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            color: doc.color,
            weight: doc.weight,
            kind: doc.kind,
            price: doc.price,
            register_date: doc.register_date,
        }
    }
}

#[derive(Clone)]
pub struct MongoProductStore {
    collection: Collection<ProductDocument>,
}

impl MongoProductStore {
    pub fn new(database: &DatabaseManager, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let documents: Vec<ProductDocument> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, StoreError> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Product::from))
    }

    async fn insert(&self, fields: ProductFields) -> Result<ObjectId, StoreError> {
        // 不带 _id 插入，由驱动生成 ObjectId
        let result = self
            .collection
            .clone_with_type::<FieldsDocument>()
            .insert_one(FieldsDocument::from(fields))
            .await?;

        match result.inserted_id.as_object_id() {
            Some(id) => Ok(id),
            None => Err(StoreError::InvalidInsertedId(result.inserted_id)),
        }
    }

    async fn update(&self, id: ObjectId, fields: ProductFields) -> Result<UpdateOutcome, StoreError> {
        let set = bson::to_document(&FieldsDocument::from(fields))?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;

        Ok(UpdateOutcome {
            matched: result.matched_count > 0,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
