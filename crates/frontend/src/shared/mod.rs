pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod form_fields;
pub mod icons;
pub mod image_url;
pub mod list_utils;
pub mod modal;
pub mod notify;
pub mod pagination;
