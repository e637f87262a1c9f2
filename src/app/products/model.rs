//! 产品数据模型

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// 已存储的产品，JSON 字段名与对外接口一致
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 产品唯一标识（ObjectId 十六进制字符串）
    #[serde(serialize_with = "bson::serde_helpers::serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "6858565146f6a7e3cbc2e4e1")]
    pub id: ObjectId,
    #[schema(example = "Paperclip")]
    pub name: String,
    #[schema(example = "It's a object used to hold papers together.")]
    pub description: String,
    #[schema(example = "gray")]
    pub color: String,
    /// 重量，单位千克
    #[schema(example = 0.05)]
    pub weight: f64,
    /// 产品类别，例如 office_supplies、electronics
    #[serde(rename = "type")]
    #[schema(example = "office_supplies")]
    pub kind: String,
    #[schema(example = 0.1)]
    pub price: f64,
    pub register_date: DateTime<Utc>,
}

/// 除 ID 以外的全部字段，创建时整体插入，更新时整体 `$set`
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub color: String,
    pub weight: f64,
    pub kind: String,
    pub price: f64,
    pub register_date: DateTime<Utc>,
}

impl ProductFields {
    pub fn into_product(self, id: ObjectId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            color: self.color,
            weight: self.weight,
            kind: self.kind,
            price: self.price,
            register_date: self.register_date,
        }
    }
}
