pub mod events;
pub mod loader;
pub mod row;
pub mod state;

use self::events::ListEvent;
use self::loader::load_products;
use self::row::ProductRow;
use self::state::create_state;
use crate::domain::a001_product::api::HttpCatalogApi;
use crate::domain::a001_product::ui::details::view_model::open_for_edit;
use crate::domain::a001_product::ui::details::{
    CreateFormFields, CreateProductDialog, EditFormFields, EditProductDialog,
};
use crate::shared::api_utils::RequestSequence;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::modal::{Dialog as _, ModalHandle};
use crate::shared::notify::{AlertNotifier, Notifier};
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const NO_DATA_TO_EXPORT: &str = "Нет данных для экспорта";

/// Клик по кнопке внутри строки не должен открывать редактирование
fn is_button_target(ev: &leptos::ev::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button").ok().flatten())
        .is_some()
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let api = HttpCatalogApi::new(config.catalog.api_url.clone());
    let placeholder = config.catalog.placeholder_image.clone();
    let export_filename = config.table.export_filename.clone();

    let state = create_state(config.table.page_size);
    let sequence = RequestSequence::new();
    let edit_sequence = RequestSequence::new();

    let create_modal = ModalHandle::new("createModal");
    let edit_modal = ModalHandle::new("editModal");
    let create_fields = CreateFormFields::new();
    let edit_fields = EditFormFields::new();

    // Единственная точка изменения состояния списка
    let send = move |event: ListEvent| {
        if let Some(action) = event.into_action() {
            state.maybe_update(|s| s.dispatch(action));
        }
    };

    let refetch = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            let sequence = sequence.clone();
            spawn_local(async move {
                load_products(&api, &sequence, |products| {
                    send(ListEvent::DataLoaded(products))
                })
                .await;
            });
        }
    });

    let open_edit = Callback::new({
        let api = api.clone();
        let placeholder = placeholder.clone();
        move |id: ProductId| {
            let api = api.clone();
            let placeholder = placeholder.clone();
            let edit_sequence = edit_sequence.clone();
            spawn_local(async move {
                let _ = open_for_edit(
                    &api,
                    &edit_sequence,
                    id,
                    &edit_fields,
                    &edit_modal,
                    &AlertNotifier,
                    &placeholder,
                )
                .await;
            });
        }
    });

    let export = move |_: leptos::ev::MouseEvent| {
        state.with_untracked(|s| {
            if s.view.is_empty() {
                AlertNotifier.notify(NO_DATA_TO_EXPORT);
                return;
            }
            if let Err(e) = export_to_csv(&s.view, &export_filename) {
                log::error!("CSV export failed: {}", e);
                AlertNotifier.notify(&format!("Ошибка экспорта: {}", e));
            }
        });
    };

    let sort_header = move |column: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                data-sort=column
                on:click=move |_| send(ListEvent::SortHeaderClicked(column))
            >
                {label}
                <span class="table__sort-icon">
                    {move || state.with(|s| {
                        get_sort_indicator(s.sort.column.as_str(), column, s.sort.is_ascending())
                    })}
                </span>
            </th>
        }
    };

    refetch.run(());

    view! {
        <div class="content">
            <div class="header">
                <h2>{icon("products")}{"Товары"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| create_modal.show()>
                        {icon("plus")}
                        {"Новый товар"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refetch.run(())>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="button button--secondary" on:click=export>
                        {icon("excel")}
                        {"Экспорт CSV"}
                    </button>
                </div>
            </div>

            <SearchInput
                value=Signal::derive(move || state.with(|s| s.search.clone()))
                on_change=Callback::new(move |text: String| send(ListEvent::SearchInput(text)))
                placeholder="Поиск по названию..."
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Фото"</th>
                            {sort_header("title", "Название")}
                            {sort_header("price", "Цена")}
                            <th class="table__header-cell">"Категория"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody id="productTableBody">
                        {move || state.with(|s| s.empty_message()).map(|text| view! {
                            <tr class="table__row">
                                <td class="table__cell" colspan="6">{text}</td>
                            </tr>
                        })}
                        {move || {
                            let rows: Vec<ProductRow> = state.with(|s| {
                                s.page_items()
                                    .iter()
                                    .map(|p| ProductRow::from_product(p, &placeholder))
                                    .collect()
                            });
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                let hovered = RwSignal::new(false);
                                let has_description = row.has_description();
                                let description = row.description;
                                view! {
                                    <tr
                                        class="table__row"
                                        on:click=move |ev| {
                                            if !is_button_target(&ev) {
                                                open_edit.run(id);
                                            }
                                        }
                                    >
                                        <td class="table__cell">{row.id}</td>
                                        <td class="table__cell">
                                            <img
                                                src=row.image_src
                                                alt=row.title.clone()
                                                referrerpolicy="no-referrer"
                                                style="width: 50px; height: 50px; object-fit: cover;"
                                            />
                                        </td>
                                        <td
                                            class="table__cell product-title"
                                            on:mouseenter=move |_| hovered.set(true)
                                            on:mouseleave=move |_| hovered.set(false)
                                        >
                                            {row.title}
                                            <Show when=move || has_description && hovered.get()>
                                                <div class="desc-box">{description.clone()}</div>
                                            </Show>
                                        </td>
                                        <td class="table__cell">{row.price_label}</td>
                                        <td class="table__cell">{row.category_name}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| open_edit.run(id)
                                            >
                                                "Изменить"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.view.len()))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page: usize| send(ListEvent::PageClicked(page)))
                on_page_size_change=Callback::new(move |raw: String| send(ListEvent::PageSizeChanged(raw)))
                page_size_options=config.table.page_size_options.clone()
            />

            <CreateProductDialog
                modal=create_modal
                fields=create_fields
                api=api.clone()
                on_saved=refetch
            />
            <EditProductDialog
                modal=edit_modal
                fields=edit_fields
                api=api
                on_saved=refetch
            />
        </div>
    }
}
