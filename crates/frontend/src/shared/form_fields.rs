//! Доступ к полям формы и кнопке отправки

use leptos::prelude::*;

/// Поля формы: строковое значение по стабильному ключу. Валидацию поля не делают
pub trait FormFields {
    fn get(&self, key: &str) -> String;
    fn set(&self, key: &str, value: &str);
}

/// Кнопка, запускающая отправку формы. Пока запрос в полёте - заблокирована
pub trait TriggerControl {
    fn set_busy(&self, busy: bool);
}

impl TriggerControl for RwSignal<bool> {
    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}
