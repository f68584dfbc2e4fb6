//! Поля форм товара и сборка тел запросов из них

use contracts::domain::a001_product::aggregate::{
    CreateProductDto, Product, ProductId, UpdateProductDto,
};
use leptos::prelude::*;

use crate::shared::error::CatalogError;
use crate::shared::form_fields::FormFields;
use crate::shared::image_url::normalize_image_url;

/// Ключи полей формы создания
pub mod create_keys {
    pub const TITLE: &str = "create-title";
    pub const PRICE: &str = "create-price";
    pub const DESCRIPTION: &str = "create-desc";
    pub const CATEGORY_ID: &str = "create-catId";
    pub const IMAGE_URL: &str = "create-img";
}

/// Ключи полей формы редактирования
pub mod edit_keys {
    pub const ID: &str = "edit-id";
    pub const TITLE: &str = "edit-title";
    pub const PRICE: &str = "edit-price";
    pub const DESCRIPTION: &str = "edit-desc";
    /// Ссылка на картинку для превью (не отправляется)
    pub const PREVIEW: &str = "edit-preview";
}

pub const CREATE_INVALID: &str = "Заполните все поля, цена должна быть больше 0!";
pub const CATEGORY_INVALID: &str = "ID категории должен быть целым числом!";
pub const EDIT_INVALID: &str = "Введите название и корректную цену!";
pub const EDIT_ID_INVALID: &str = "Некорректный ID товара";

/// Число из поля ввода: пустая строка -> 0, мусор -> `None`
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Целое по ведущим цифрам: `"12.7"` -> 12, `" 42abc"` -> 42, `"abc"` -> `None`
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// Тело `POST /products` из формы создания
pub fn build_create_payload<F: FormFields + ?Sized>(
    fields: &F,
) -> Result<CreateProductDto, CatalogError> {
    let title = fields.get(create_keys::TITLE).trim().to_string();
    let description = fields.get(create_keys::DESCRIPTION).trim().to_string();
    let image_url = fields.get(create_keys::IMAGE_URL).trim().to_string();
    let price = parse_number(&fields.get(create_keys::PRICE));

    let price = match price {
        Some(p) if p > 0.0 && !title.is_empty() && !description.is_empty() && !image_url.is_empty() => p,
        _ => return Err(CatalogError::Validation(CREATE_INVALID.to_string())),
    };

    let category_raw = fields.get(create_keys::CATEGORY_ID);
    let category_id = category_raw
        .trim()
        .parse::<i64>()
        .map_err(|_| CatalogError::Validation(CATEGORY_INVALID.to_string()))?;

    Ok(CreateProductDto {
        title,
        price,
        description,
        category_id,
        images: vec![image_url],
    })
}

/// Тело `PUT /products/{id}` из формы редактирования
pub fn build_update_payload<F: FormFields + ?Sized>(
    fields: &F,
) -> Result<(ProductId, UpdateProductDto), CatalogError> {
    let title = fields.get(edit_keys::TITLE).trim().to_string();
    let price = parse_leading_int(&fields.get(edit_keys::PRICE));
    let description = fields.get(edit_keys::DESCRIPTION).trim().to_string();

    let price = match price {
        Some(p) if p > 0 && !title.is_empty() => p,
        _ => return Err(CatalogError::Validation(EDIT_INVALID.to_string())),
    };

    let id = fields
        .get(edit_keys::ID)
        .trim()
        .parse::<ProductId>()
        .map_err(|_| CatalogError::Validation(EDIT_ID_INVALID.to_string()))?;

    Ok((
        id,
        UpdateProductDto {
            title: Some(title),
            price: Some(price),
            description: Some(description),
        },
    ))
}

/// Заполнить форму редактирования данными товара
pub fn fill_edit_fields<F: FormFields + ?Sized>(fields: &F, product: &Product, placeholder: &str) {
    fields.set(edit_keys::ID, &product.id.to_string());
    fields.set(edit_keys::TITLE, &product.title);
    fields.set(edit_keys::PRICE, &product.price.to_string());
    fields.set(edit_keys::DESCRIPTION, &product.description);
    fields.set(
        edit_keys::PREVIEW,
        &normalize_image_url(product.primary_image(), placeholder),
    );
}

// ============================================================================
// Поля на сигналах для view
// ============================================================================

#[derive(Clone, Copy)]
pub struct CreateFormFields {
    pub title: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub image_url: RwSignal<String>,
}

impl CreateFormFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category_id: RwSignal::new("1".to_string()),
            image_url: RwSignal::new(String::new()),
        }
    }

    fn signal(&self, key: &str) -> Option<RwSignal<String>> {
        match key {
            create_keys::TITLE => Some(self.title),
            create_keys::PRICE => Some(self.price),
            create_keys::DESCRIPTION => Some(self.description),
            create_keys::CATEGORY_ID => Some(self.category_id),
            create_keys::IMAGE_URL => Some(self.image_url),
            _ => None,
        }
    }
}

impl FormFields for CreateFormFields {
    fn get(&self, key: &str) -> String {
        self.signal(key)
            .map(|s| s.get_untracked())
            .unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        match self.signal(key) {
            Some(s) => s.set(value.to_string()),
            None => log::warn!("unknown create form field: {}", key),
        }
    }
}

#[derive(Clone, Copy)]
pub struct EditFormFields {
    pub id: RwSignal<String>,
    pub title: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
    pub preview: RwSignal<String>,
}

impl EditFormFields {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            preview: RwSignal::new(String::new()),
        }
    }

    fn signal(&self, key: &str) -> Option<RwSignal<String>> {
        match key {
            edit_keys::ID => Some(self.id),
            edit_keys::TITLE => Some(self.title),
            edit_keys::PRICE => Some(self.price),
            edit_keys::DESCRIPTION => Some(self.description),
            edit_keys::PREVIEW => Some(self.preview),
            _ => None,
        }
    }
}

impl FormFields for EditFormFields {
    fn get(&self, key: &str) -> String {
        self.signal(key)
            .map(|s| s.get_untracked())
            .unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        match self.signal(key) {
            Some(s) => s.set(value.to_string()),
            None => log::warn!("unknown edit form field: {}", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock::MapFields;
    use crate::domain::a001_product::ui::list::state::tests::product;

    fn create_form(price: &str) -> MapFields {
        MapFields::with(&[
            (create_keys::TITLE, " Lamp "),
            (create_keys::PRICE, price),
            (create_keys::DESCRIPTION, "Desk lamp"),
            (create_keys::CATEGORY_ID, "2"),
            (create_keys::IMAGE_URL, "https://x.com/lamp.png"),
        ])
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12.7"), Some(12));
        assert_eq!(parse_leading_int(" 42abc"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_create_payload() {
        let dto = build_create_payload(&create_form("15")).unwrap();
        assert_eq!(dto.title, "Lamp");
        assert_eq!(dto.price, 15.0);
        assert_eq!(dto.category_id, 2);
        assert_eq!(dto.images, vec!["https://x.com/lamp.png".to_string()]);
    }

    #[test]
    fn test_create_rejects_non_positive_price() {
        for price in ["0", "", "-5", "abc"] {
            let err = build_create_payload(&create_form(price)).unwrap_err();
            assert_eq!(err, CatalogError::Validation(CREATE_INVALID.to_string()));
        }
    }

    #[test]
    fn test_create_requires_image_url() {
        let fields = create_form("10");
        fields.set(create_keys::IMAGE_URL, "   ");
        assert!(build_create_payload(&fields).is_err());
    }

    #[test]
    fn test_create_rejects_bad_category() {
        let fields = create_form("10");
        fields.set(create_keys::CATEGORY_ID, "one");
        assert_eq!(
            build_create_payload(&fields).unwrap_err(),
            CatalogError::Validation(CATEGORY_INVALID.to_string())
        );
    }

    #[test]
    fn test_update_payload_sends_description() {
        let fields = MapFields::with(&[
            (edit_keys::ID, "4"),
            (edit_keys::TITLE, "Table"),
            (edit_keys::PRICE, "99.9"),
        ]);
        let (id, dto) = build_update_payload(&fields).unwrap();
        assert_eq!(id, 4);
        assert_eq!(dto.price, Some(99));
        assert_eq!(dto.description, Some(String::new()));
    }

    #[test]
    fn test_update_rejects_empty_title() {
        let fields = MapFields::with(&[
            (edit_keys::ID, "4"),
            (edit_keys::TITLE, "  "),
            (edit_keys::PRICE, "10"),
        ]);
        assert_eq!(
            build_update_payload(&fields).unwrap_err(),
            CatalogError::Validation(EDIT_INVALID.to_string())
        );
    }

    #[test]
    fn test_fill_edit_fields_normalizes_preview() {
        let fields = MapFields::default();
        let mut p = product(4, "Table", 687.0);
        p.images = vec!["[\"http://x.com/a.png\"]".to_string()];
        fill_edit_fields(&fields, &p, "placeholder");
        assert_eq!(fields.get(edit_keys::ID), "4");
        assert_eq!(fields.get(edit_keys::PRICE), "687");
        assert_eq!(fields.get(edit_keys::PREVIEW), "http://x.com/a.png");
    }
}
