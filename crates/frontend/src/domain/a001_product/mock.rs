//! Тестовые двойники для контроллеров и загрузчика

use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{
    Category, CreateProductDto, Product, ProductId, UpdateProductDto,
};
use std::cell::RefCell;
use std::collections::HashMap;

use super::api::CatalogApi;
use crate::shared::api_utils::RequestSequence;
use crate::shared::error::CatalogError;
use crate::shared::form_fields::{FormFields, TriggerControl};
use crate::shared::modal::Dialog;
use crate::shared::notify::Notifier;

#[derive(Default)]
pub struct MockCatalogApi {
    pub products: Vec<Product>,
    pub fail_with: Option<CatalogError>,
    pub calls: RefCell<Vec<String>>,
    pub created: RefCell<Vec<CreateProductDto>>,
    pub updated: RefCell<Vec<(ProductId, UpdateProductDto)>>,
}

impl MockCatalogApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self {
            fail_with: Some(error),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) -> Result<(), CatalogError> {
        self.calls.borrow_mut().push(call.to_string());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for MockCatalogApi {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.record("list_all")?;
        Ok(self.products.clone())
    }

    async fn get_one(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.record(&format!("get_one:{}", id))?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn create(&self, payload: &CreateProductDto) -> Result<Product, CatalogError> {
        self.record("create")?;
        self.created.borrow_mut().push(payload.clone());
        Ok(Product {
            id: 100,
            title: payload.title.clone(),
            slug: None,
            price: payload.price,
            description: payload.description.clone(),
            category: Category {
                id: payload.category_id,
                name: "Created".to_string(),
                slug: None,
                image: None,
            },
            images: payload.images.clone(),
            creation_at: None,
            updated_at: None,
        })
    }

    async fn update(
        &self,
        id: ProductId,
        partial: &UpdateProductDto,
    ) -> Result<Product, CatalogError> {
        self.record(&format!("update:{}", id))?;
        self.updated.borrow_mut().push((id, partial.clone()));
        let mut product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))?;
        if let Some(title) = &partial.title {
            product.title = title.clone();
        }
        if let Some(price) = partial.price {
            product.price = price as f64;
        }
        Ok(product)
    }
}

/// Пока идёт чтение, пользователь успевает запустить более новый запрос
pub struct RacingApi {
    inner: MockCatalogApi,
    sequence: RequestSequence,
}

impl RacingApi {
    pub fn new(inner: MockCatalogApi, sequence: &RequestSequence) -> Self {
        Self {
            inner,
            sequence: sequence.clone(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for RacingApi {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.sequence.begin();
        self.inner.list_all().await
    }

    async fn get_one(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.sequence.begin();
        self.inner.get_one(id).await
    }

    async fn create(&self, payload: &CreateProductDto) -> Result<Product, CatalogError> {
        self.inner.create(payload).await
    }

    async fn update(
        &self,
        id: ProductId,
        partial: &UpdateProductDto,
    ) -> Result<Product, CatalogError> {
        self.inner.update(id, partial).await
    }
}

#[derive(Default)]
pub struct RecordingDialog {
    pub events: RefCell<Vec<&'static str>>,
}

impl Dialog for RecordingDialog {
    fn show(&self) {
        self.events.borrow_mut().push("show");
    }

    fn hide(&self) {
        self.events.borrow_mut().push("hide");
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct MapFields {
    values: RefCell<HashMap<String, String>>,
}

impl MapFields {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let fields = Self::default();
        for (key, value) in entries {
            fields.set(key, value);
        }
        fields
    }
}

impl FormFields for MapFields {
    fn get(&self, key: &str) -> String {
        self.values.borrow().get(key).cloned().unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Default)]
pub struct RecordingTrigger {
    pub states: RefCell<Vec<bool>>,
}

impl RecordingTrigger {
    pub fn is_busy(&self) -> bool {
        self.states.borrow().last().copied().unwrap_or(false)
    }
}

impl TriggerControl for RecordingTrigger {
    fn set_busy(&self, busy: bool) {
        self.states.borrow_mut().push(busy);
    }
}
