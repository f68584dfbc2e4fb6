//! Ошибки работы с каталогом

use contracts::domain::a001_product::aggregate::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Транспортная ошибка: запрос не дошёл или ответ не прочитан
    #[error("network error: {0}")]
    Network(String),

    /// Тело ответа не разбирается как ожидаемый JSON
    #[error("decode error: {0}")]
    Decode(String),

    /// Неверные данные: локальная проверка формы или отказ сервера
    #[error("validation error: {0}")]
    Validation(String),

    #[error("product {0} not found")]
    NotFound(ProductId),
}

impl CatalogError {
    /// Текст для уведомления пользователя
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network(_) => "Не удалось подключиться к серверу!".to_string(),
            CatalogError::Decode(_) => "Сервер вернул некорректный ответ".to_string(),
            CatalogError::Validation(msg) => msg.clone(),
            CatalogError::NotFound(id) => format!("Товар {} не найден", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_validation_text() {
        let err = CatalogError::Validation("price must be a positive number".to_string());
        assert_eq!(err.user_message(), "price must be a positive number");
    }

    #[test]
    fn test_display() {
        assert_eq!(CatalogError::NotFound(7).to_string(), "product 7 not found");
        assert_eq!(
            CatalogError::Network("timeout".into()).to_string(),
            "network error: timeout"
        );
    }
}
