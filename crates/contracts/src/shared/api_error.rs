use serde::{Deserialize, Serialize};

/// Поле `message` ошибки API: строка или список строк (ошибки валидации)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Text(String),
    List(Vec<String>),
}

/// Тело ответа API с ошибкой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<ApiMessage>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
}

impl ApiErrorResponse {
    /// Текст сообщения для пользователя; `None`, если сервер ничего не прислал
    pub fn message_text(&self) -> Option<String> {
        let text = match self.message.as_ref()? {
            ApiMessage::Text(s) => s.trim().to_string(),
            ApiMessage::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_list_is_joined() {
        let body = r#"{"message":["price must be a positive number","images must be an array"],"error":"Bad Request","statusCode":400}"#;
        let err: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            err.message_text().as_deref(),
            Some("price must be a positive number; images must be an array")
        );
        assert_eq!(err.status_code, Some(400));
    }

    #[test]
    fn test_message_text() {
        let err: ApiErrorResponse = serde_json::from_str(r#"{"message":"Not Found"}"#).unwrap();
        assert_eq!(err.message_text().as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_missing_or_blank_message() {
        let err: ApiErrorResponse = serde_json::from_str(r#"{"statusCode":500}"#).unwrap();
        assert_eq!(err.message_text(), None);

        let err: ApiErrorResponse = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(err.message_text(), None);
    }
}
