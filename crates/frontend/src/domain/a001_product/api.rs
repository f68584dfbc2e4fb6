//! Клиент удалённого каталога товаров

use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{
    CreateProductDto, Product, ProductId, UpdateProductDto,
};
use contracts::shared::api_error::ApiErrorResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::item_url;
use crate::shared::error::CatalogError;

/// Операции каталога. Повторов нет: любая ошибка возвращается вызывающему
#[async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /products`
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// `GET /products/{id}`
    async fn get_one(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// `POST /products`
    async fn create(&self, payload: &CreateProductDto) -> Result<Product, CatalogError>;

    /// `PUT /products/{id}`
    async fn update(
        &self,
        id: ProductId,
        partial: &UpdateProductDto,
    ) -> Result<Product, CatalogError>;
}

/// HTTP реализация поверх `gloo-net`
#[derive(Clone, Debug)]
pub struct HttpCatalogApi {
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        let response = Request::get(&self.base_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(CatalogError::Network(format!("HTTP {}", response.status())));
        }

        read_json(response).await
    }

    async fn get_one(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = Request::get(&item_url(&self.base_url, id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            log::warn!("GET product {} -> HTTP {}", id, response.status());
            return Err(CatalogError::NotFound(id));
        }

        read_json(response).await
    }

    async fn create(&self, payload: &CreateProductDto) -> Result<Product, CatalogError> {
        log::debug!("POST product payload: {:?}", payload);

        let response = Request::post(&self.base_url)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| CatalogError::Validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        read_json(response).await
    }

    async fn update(
        &self,
        id: ProductId,
        partial: &UpdateProductDto,
    ) -> Result<Product, CatalogError> {
        log::debug!("PUT product {} payload: {:?}", id, partial);

        let response = Request::put(&item_url(&self.base_url, id))
            .header("Accept", "application/json")
            .json(partial)
            .map_err(|e| CatalogError::Validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let text = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(format!("Failed to read response: {}", e)))?;
    decode_body(&text)
}

/// Разбор тела ответа; ошибка формата - `Decode`
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, CatalogError> {
    serde_json::from_str(text)
        .map_err(|e| CatalogError::Decode(format!("Failed to parse response: {}", e)))
}

/// Отказ сервера на запись: берём `message` из тела, если он есть
async fn rejection(response: Response) -> CatalogError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("Server error {}: {}", status, body);
    CatalogError::Validation(rejection_message(status, &body))
}

pub fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message_text())
        .unwrap_or_else(|| format!("HTTP {}", status))
}
