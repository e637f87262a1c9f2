//! 请求 DTO 与到存储字段的转换

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::model::ProductFields;
use crate::core::error::CoreError;

/// 创建产品请求
///
/// name、weight、type、price 必填，且不能是零值：字符串不能为空，数字不能为 0。
/// 负数的 weight 和 price 不做拦截。
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_non_zero_numbers", skip_on_field_errors = false))]
pub struct CreateProductDto {
    #[validate(required, length(min = 1))]
    #[schema(value_type = String, example = "Paperclip")]
    pub name: Option<String>,
    #[schema(example = "It's a object used to hold papers together.")]
    pub description: Option<String>,
    #[schema(example = "gray")]
    pub color: Option<String>,
    #[validate(required)]
    #[schema(value_type = f64, example = 0.05)]
    pub weight: Option<f64>,
    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    #[schema(value_type = String, example = "office_supplies")]
    pub kind: Option<String>,
    #[validate(required)]
    #[schema(value_type = f64, example = 0.1)]
    pub price: Option<f64>,
}

/// 必填数字为 0 时视为未提供
fn validate_non_zero_numbers(dto: &CreateProductDto) -> Result<(), ValidationError> {
    let is_zero = |value: Option<f64>| value == Some(0.0);
    if is_zero(dto.weight) || is_zero(dto.price) {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl CreateProductDto {
    /// 转换为待插入的字段，注册时间由服务端给定
    pub fn into_fields(self, register_date: DateTime<Utc>) -> Result<ProductFields, CoreError> {
        Ok(ProductFields {
            name: self.name.ok_or(CoreError::InvalidRequestBody)?,
            description: self.description.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            weight: self.weight.ok_or(CoreError::InvalidRequestBody)?,
            kind: self.kind.ok_or(CoreError::InvalidRequestBody)?,
            price: self.price.ok_or(CoreError::InvalidRequestBody)?,
            register_date,
        })
    }
}

/// 更新产品请求
///
/// 整体覆盖所有字段，缺省或为 null 的字段按零值写入（空字符串、0、Unix 纪元）。
/// 与创建不同，registerDate 可由调用方指定。
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[schema(example = "Paperclip")]
    pub name: Option<String>,
    #[schema(example = "It's a object used to hold papers together.")]
    pub description: Option<String>,
    #[schema(example = "gray")]
    pub color: Option<String>,
    #[schema(example = 0.05)]
    pub weight: Option<f64>,
    #[serde(rename = "type")]
    #[schema(example = "office_supplies")]
    pub kind: Option<String>,
    #[schema(example = 0.1)]
    pub price: Option<f64>,
    pub register_date: Option<DateTime<Utc>>,
}

impl From<UpdateProductDto> for ProductFields {
    fn from(dto: UpdateProductDto) -> Self {
        ProductFields {
            name: dto.name.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            color: dto.color.unwrap_or_default(),
            weight: dto.weight.unwrap_or_default(),
            kind: dto.kind.unwrap_or_default(),
            price: dto.price.unwrap_or_default(),
            register_date: dto.register_date.unwrap_or_default(),
        }
    }
}
