//! Таблица событий UI -> действия над состоянием списка
//!
//! Компоненты не трогают состояние напрямую: они шлют именованные события
//! с сырыми данными из DOM, а здесь решается, во что они превращаются.

use contracts::domain::a001_product::aggregate::Product;

use super::state::{ListAction, SortColumn};

#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// Ответ `GET /products`
    DataLoaded(Vec<Product>),
    /// `input` в поле поиска
    SearchInput(String),
    /// Клик по заголовку колонки (`data-sort`)
    SortHeaderClicked(&'static str),
    /// `change` в селекте размера страницы
    PageSizeChanged(String),
    /// Клик по номеру страницы
    PageClicked(usize),
}

impl ListEvent {
    pub fn into_action(self) -> Option<ListAction> {
        match self {
            ListEvent::DataLoaded(products) => Some(ListAction::Loaded(products)),
            ListEvent::SearchInput(text) => Some(ListAction::Search(text)),
            ListEvent::SortHeaderClicked(name) => match SortColumn::from_name(name) {
                Some(SortColumn::None) | None => {
                    log::warn!("unknown sort column: {:?}", name);
                    None
                }
                Some(column) => Some(ListAction::Sort(column)),
            },
            ListEvent::PageSizeChanged(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => Some(ListAction::SetPageSize(size)),
                _ => {
                    log::warn!("invalid page size: {:?}", raw);
                    None
                }
            },
            ListEvent::PageClicked(page) => Some(ListAction::GoToPage(page)),
        }
    }
}
