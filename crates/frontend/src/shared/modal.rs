use leptos::prelude::*;

/// Диалог, которым управляют контроллеры форм
pub trait Dialog {
    fn show(&self);
    fn hide(&self);
}

/// Хэндл модального окна: флаг видимости плюс id контейнера в DOM
#[derive(Clone, Copy)]
pub struct ModalHandle {
    container_id: &'static str,
    is_visible: RwSignal<bool>,
}

impl ModalHandle {
    pub fn new(container_id: &'static str) -> Self {
        Self {
            container_id,
            is_visible: RwSignal::new(false),
        }
    }

    pub fn container_id(&self) -> &'static str {
        self.container_id
    }

    /// Сигнал открытия для `thaw::Dialog`
    pub fn open_signal(&self) -> RwSignal<bool> {
        self.is_visible
    }
}

impl Dialog for ModalHandle {
    fn show(&self) {
        log::debug!("modal #{} shown", self.container_id);
        self.is_visible.set(true);
    }

    fn hide(&self) {
        self.is_visible.set(false);
    }
}
