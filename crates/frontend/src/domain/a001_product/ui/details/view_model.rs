//! Контроллеры форм создания и редактирования
//!
//! Вся логика отправки живёт здесь, view только связывает сигналы.
//! Кнопка отправки разблокируется при любом исходе.

use contracts::domain::a001_product::aggregate::{Product, ProductId};

use super::model::{build_create_payload, build_update_payload, create_keys, fill_edit_fields};
use crate::domain::a001_product::api::CatalogApi;
use crate::shared::api_utils::RequestSequence;
use crate::shared::error::CatalogError;
use crate::shared::form_fields::{FormFields, TriggerControl};
use crate::shared::modal::Dialog;
use crate::shared::notify::Notifier;

pub const UPDATE_SUCCESS: &str = "Товар обновлён!";
pub const UPDATE_FAILED: &str = "Не удалось обновить товар. Сервер вернул ошибку.";
pub const LOAD_FAILED: &str = "Не удалось загрузить товар";

/// Окружение формы: диалог, уведомления, кнопка отправки
pub struct FormUi<'a> {
    pub dialog: &'a dyn Dialog,
    pub notifier: &'a dyn Notifier,
    pub trigger: &'a dyn TriggerControl,
}

/// Создать товар из формы. `on_saved` запускает полную перезагрузку списка
pub async fn submit_create<A, F>(
    api: &A,
    fields: &F,
    ui: &FormUi<'_>,
    on_saved: impl FnOnce(),
) -> Result<Product, CatalogError>
where
    A: CatalogApi + ?Sized,
    F: FormFields + ?Sized,
{
    let payload = match build_create_payload(fields) {
        Ok(payload) => payload,
        Err(e) => {
            ui.notifier.notify(&e.user_message());
            ui.trigger.set_busy(false);
            return Err(e);
        }
    };

    ui.trigger.set_busy(true);
    log::debug!("creating product {:?}", payload.title);
    let result = api.create(&payload).await;
    ui.trigger.set_busy(false);

    match &result {
        Ok(created) => {
            log::info!("product {} created", created.id);
            ui.notifier
                .notify(&format!("Товар создан: {}", created.title));
            ui.dialog.hide();
            fields.set(create_keys::TITLE, "");
            fields.set(create_keys::DESCRIPTION, "");
            on_saved();
        }
        Err(e) => {
            log::error!("create failed: {}", e);
            let text = match e {
                CatalogError::Network(_) => e.user_message(),
                _ => format!("Ошибка: {}", e.user_message()),
            };
            ui.notifier.notify(&text);
        }
    }
    result
}

/// Чем закончилось открытие товара на редактирование
#[derive(Debug, PartialEq)]
pub enum EditLoad {
    Shown,
    /// Пока товар грузился, открыли другой; ответ выброшен
    Stale,
}

/// Загрузить товар в форму редактирования и открыть диалог
pub async fn open_for_edit<A, F>(
    api: &A,
    sequence: &RequestSequence,
    id: ProductId,
    fields: &F,
    dialog: &dyn Dialog,
    notifier: &dyn Notifier,
    placeholder_image: &str,
) -> Result<EditLoad, CatalogError>
where
    A: CatalogApi + ?Sized,
    F: FormFields + ?Sized,
{
    let ticket = sequence.begin();
    let result = api.get_one(id).await;

    if !sequence.is_latest(ticket) {
        log::debug!("dropping stale product {} response #{}", id, ticket);
        return Ok(EditLoad::Stale);
    }

    match result {
        Ok(product) => {
            fill_edit_fields(fields, &product, placeholder_image);
            dialog.show();
            Ok(EditLoad::Shown)
        }
        Err(e) => {
            log::error!("failed to load product {}: {}", id, e);
            notifier.notify(&format!("{}: {}", LOAD_FAILED, e.user_message()));
            Err(e)
        }
    }
}

/// Сохранить изменения из формы редактирования
pub async fn submit_update<A, F>(
    api: &A,
    fields: &F,
    ui: &FormUi<'_>,
    on_saved: impl FnOnce(),
) -> Result<Product, CatalogError>
where
    A: CatalogApi + ?Sized,
    F: FormFields + ?Sized,
{
    let (id, partial) = match build_update_payload(fields) {
        Ok(parsed) => parsed,
        Err(e) => {
            ui.notifier.notify(&e.user_message());
            ui.trigger.set_busy(false);
            return Err(e);
        }
    };

    ui.trigger.set_busy(true);
    let result = api.update(id, &partial).await;
    ui.trigger.set_busy(false);

    match &result {
        Ok(_) => {
            log::info!("product {} updated", id);
            ui.notifier.notify(UPDATE_SUCCESS);
            ui.dialog.hide();
            on_saved();
        }
        Err(e @ CatalogError::Network(_)) => {
            log::error!("update of {} failed: {}", id, e);
            ui.notifier.notify(&e.user_message());
        }
        Err(e) => {
            log::error!("Server Error: {}", e);
            ui.notifier.notify(UPDATE_FAILED);
        }
    }
    result
}
