use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара в удалённом каталоге (целое число, выдаётся API)
pub type ProductId = i64;

// ============================================================================
// Aggregate
// ============================================================================

/// Категория товара, как её возвращает каталог
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,

    /// URL картинки категории
    #[serde(default)]
    pub image: Option<String>,
}

/// Товар каталога
///
/// Владелец записи - удалённый API; клиент держит только копию последней загрузки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,

    #[serde(default)]
    pub slug: Option<String>,

    pub price: f64,

    #[serde(default)]
    pub description: String,

    pub category: Category,

    /// Ссылки на изображения. Встречаются "грязные" значения вида `["http://..."]`
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(rename = "creationAt", default)]
    pub creation_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Первое изображение товара (как хранится, без нормализации)
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Тело `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductDto {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub images: Vec<String>,
}

/// Тело `PUT /products/{id}`. Отсутствующие поля не сериализуются
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
