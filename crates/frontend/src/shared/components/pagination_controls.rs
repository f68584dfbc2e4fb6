use crate::shared::icons::icon;
use crate::shared::pagination::{has_page_controls, visible_pages, PageItem};
use leptos::prelude::*;

/// PaginationControls component - numbered pages with gaps plus a page size selector
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items in the filtered view
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Raw value of the page size selector
    on_page_size_change: Callback<String>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls" id="pagination">
            <Show when=move || has_page_controls(total_pages.get())>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    visible_pages(current, total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=page == current
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageItem::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("Всего: {}", total_count.get())}
                </span>
            </Show>
            <select
                id="pageSize"
                class="page-size-select"
                on:change=move |ev| on_page_size_change.run(event_target_value(&ev))
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
