use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_text, filter_list, sort_list, Searchable, Sortable};
use crate::shared::pagination::{self, PageItem};

// ============================================================================
// Сортировка
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    None,
    Title,
    Price,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::None => "",
            SortColumn::Title => "title",
            SortColumn::Price => "price",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" => Some(SortColumn::None),
            "title" => Some(SortColumn::Title),
            "price" => Some(SortColumn::Price),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortDirective {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortDirective {
    /// Клик по заголовку: та же колонка по возрастанию -> убывание, иначе возрастание
    pub fn activate(&mut self, column: SortColumn) {
        self.direction = if self.column == column && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.column = column;
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.title.to_lowercase().contains(filter_lower)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(&self.title, &other.title),
            "price" => self.price.total_cmp(&other.price),
            _ => Ordering::Equal,
        }
    }
}

/// Представление: фильтр по названию, затем стабильная сортировка.
/// Чистая функция от `(all, search, sort)`
pub fn apply(all: &[Product], search: &str, sort: SortDirective) -> Vec<Product> {
    let mut result = filter_list(all, search);
    if sort.column != SortColumn::None {
        sort_list(&mut result, sort.column.as_str(), sort.is_ascending());
    }
    result
}

// ============================================================================
// Состояние списка
// ============================================================================

pub const LOADING_TEXT: &str = "Загрузка...";
pub const NO_PRODUCTS_TEXT: &str = "Товары не найдены";

/// Единственный способ менять состояние списка
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    Loaded(Vec<Product>),
    Search(String),
    Sort(SortColumn),
    SetPageSize(usize),
    GoToPage(usize),
}

#[derive(Clone, Debug)]
pub struct ProductListState {
    /// Последняя полная загрузка
    pub all_products: Vec<Product>,
    /// Отфильтрованное и отсортированное представление `all_products`
    pub view: Vec<Product>,

    // Фильтры
    pub search: String,

    // Сортировка
    pub sort: SortDirective,

    // Клиентская пагинация (страницы с 1)
    pub page: usize,
    pub page_size: usize,

    // Флаг загрузки
    pub is_loaded: bool,
}

impl ProductListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_products: Vec::new(),
            view: Vec::new(),
            search: String::new(),
            sort: SortDirective::default(),
            page: 1,
            page_size: page_size.max(1),
            is_loaded: false,
        }
    }

    /// Применить действие. `false` - состояние не изменилось, перерисовка не нужна
    pub fn dispatch(&mut self, action: ListAction) -> bool {
        match action {
            ListAction::Loaded(products) => {
                self.all_products = products;
                self.is_loaded = true;
                self.recompute();
                self.page = self.page.clamp(1, self.total_pages().max(1));
                true
            }
            ListAction::Search(text) => {
                if text == self.search {
                    return false;
                }
                self.search = text;
                self.recompute();
                self.page = 1;
                true
            }
            ListAction::Sort(SortColumn::None) => false,
            ListAction::Sort(column) => {
                self.sort.activate(column);
                self.recompute();
                true
            }
            ListAction::SetPageSize(size) => {
                if size == 0 || (size == self.page_size && self.page == 1) {
                    return false;
                }
                self.page_size = size;
                self.page = 1;
                true
            }
            ListAction::GoToPage(page) => {
                let page = page.clamp(1, self.total_pages().max(1));
                if page == self.page {
                    return false;
                }
                self.page = page;
                true
            }
        }
    }

    fn recompute(&mut self) {
        self.view = apply(&self.all_products, &self.search, self.sort);
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.view.len(), self.page_size)
    }

    /// Товары текущей страницы
    pub fn page_items(&self) -> &[Product] {
        pagination::page_slice(&self.view, self.page, self.page_size)
    }

    /// Текст вместо строк таблицы: до первой загрузки и при пустом представлении
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.is_loaded {
            Some(LOADING_TEXT)
        } else if self.view.is_empty() {
            Some(NO_PRODUCTS_TEXT)
        } else {
            None
        }
    }

    pub fn visible_pages(&self) -> Vec<PageItem> {
        pagination::visible_pages(self.page, self.total_pages())
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::new(page_size))
}
