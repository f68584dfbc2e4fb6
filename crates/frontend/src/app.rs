use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Настройки каталога и таблицы доступны всему приложению через context.
    let config = load_config();
    log::info!("catalog api: {}", config.catalog.api_url);
    provide_context(config);

    view! {
        <ConfigProvider>
            <ProductList />
        </ConfigProvider>
    }
}
