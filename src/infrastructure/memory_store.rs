//! 内存产品存储，按插入顺序保存，主要用于测试

use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::app::products::{
    model::{Product, ProductFields},
    store::{ProductStore, StoreError, UpdateOutcome},
};

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    async fn insert(&self, fields: ProductFields) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        self.products.write().await.push(fields.into_product(id));
        Ok(id)
    }

    async fn update(&self, id: ObjectId, fields: ProductFields) -> Result<UpdateOutcome, StoreError> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|product| product.id == id) {
            Some(product) => {
                *product = fields.into_product(id);
                Ok(UpdateOutcome { matched: true })
            }
            None => Ok(UpdateOutcome { matched: false }),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|product| product.id != id);
        Ok((before - products.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: String::new(),
            color: String::new(),
            weight: 1.0,
            kind: "tools".to_string(),
            price: 2.5,
            register_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = InMemoryProductStore::new();
        let first = store.insert(fields("hammer")).await.unwrap();
        let second = store.insert(fields("wrench")).await.unwrap();

        let ids: Vec<ObjectId> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|product| product.id)
            .collect();

        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn update_replaces_all_fields_but_keeps_id() {
        let store = InMemoryProductStore::new();
        let id = store.insert(fields("hammer")).await.unwrap();

        let outcome = store.update(id, fields("mallet")).await.unwrap();
        assert!(outcome.matched);

        let product = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "mallet");
    }

    #[tokio::test]
    async fn update_of_unknown_id_does_not_insert() {
        let store = InMemoryProductStore::new();

        let outcome = store.update(ObjectId::new(), fields("ghost")).await.unwrap();

        assert!(!outcome.matched);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_reports_count() {
        let store = InMemoryProductStore::new();
        let id = store.insert(fields("hammer")).await.unwrap();

        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert_eq!(store.len().await, 0);
    }
}
