/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (запрос уже в нижнем регистре)
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сравнение строк с учётом локали браузера (`String.prototype.localeCompare`)
#[cfg(target_arch = "wasm32")]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new())
        .cmp(&0)
}

/// Сравнение строк вне браузера: буквы без диакритики и регистра, затем строчные
/// раньше заглавных, затем исходная строка
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(not(target_arch = "wasm32"))]
fn collation_key(s: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn case_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

/// Фильтрует список по поисковому запросу. Пустой запрос возвращает всё в исходном порядке
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Стабильная сортировка по полю. Для убывания разворачивается компаратор,
/// поэтому равные элементы сохраняют исходный порядок в обоих направлениях
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            "↑"
        } else {
            "↓"
        }
    } else {
        "↕"
    }
}

/// Поле поиска с кнопкой очистки. Каждое изменение сразу уходит в `on_change`
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                id="searchInput"
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Очистить"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
