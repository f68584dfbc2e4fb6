use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::{CreateFormFields, EditFormFields};
use super::view_model::{submit_create, submit_update, FormUi};
use crate::domain::a001_product::api::HttpCatalogApi;
use crate::shared::modal::{Dialog as _, ModalHandle};
use crate::shared::notify::AlertNotifier;

/// Диалог создания товара
#[component]
pub fn CreateProductDialog(
    modal: ModalHandle,
    fields: CreateFormFields,
    api: HttpCatalogApi,
    /// Полная перезагрузка списка после успешного сохранения
    on_saved: Callback<()>,
) -> impl IntoView {
    let sending = RwSignal::new(false);

    let submit = move |_: leptos::ev::MouseEvent| {
        if sending.get_untracked() {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            let notifier = AlertNotifier;
            let ui = FormUi {
                dialog: &modal,
                notifier: &notifier,
                trigger: &sending,
            };
            let _ = submit_create(&api, &fields, &ui, || on_saved.run(())).await;
        });
    };

    view! {
        <Dialog open=modal.open_signal()>
            <DialogSurface attr:id=modal.container_id()>
                <DialogBody>
                    <DialogTitle>"Новый товар"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <label>"Название"</label>
                            <Input value=fields.title placeholder="Название товара" />
                            <label>"Цена"</label>
                            <Input value=fields.price input_type=InputType::Number placeholder="0" />
                            <label>"Описание"</label>
                            <Textarea value=fields.description placeholder="Описание" attr:rows=3 />
                            <label>"ID категории"</label>
                            <Input value=fields.category_id input_type=InputType::Number />
                            <label>"Ссылка на изображение"</label>
                            <Input value=fields.image_url placeholder="https://..." />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || sending.get())
                            on_click=submit
                        >
                            {move || if sending.get() { "Отправка..." } else { "Создать" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| modal.hide()
                        >
                            "Отмена"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Диалог редактирования товара. Поля заполняет `open_for_edit`
#[component]
pub fn EditProductDialog(
    modal: ModalHandle,
    fields: EditFormFields,
    api: HttpCatalogApi,
    on_saved: Callback<()>,
) -> impl IntoView {
    let saving = RwSignal::new(false);

    let submit = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            let notifier = AlertNotifier;
            let ui = FormUi {
                dialog: &modal,
                notifier: &notifier,
                trigger: &saving,
            };
            let _ = submit_update(&api, &fields, &ui, || on_saved.run(())).await;
        });
    };

    view! {
        <Dialog open=modal.open_signal()>
            <DialogSurface attr:id=modal.container_id()>
                <DialogBody>
                    <DialogTitle>
                        {move || format!("Редактирование товара #{}", fields.id.get())}
                    </DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <img
                                class="product-preview"
                                src=move || fields.preview.get()
                                referrerpolicy="no-referrer"
                                alt="preview"
                            />
                            <label>"Название"</label>
                            <Input value=fields.title />
                            <label>"Цена"</label>
                            <Input value=fields.price input_type=InputType::Number />
                            <label>"Описание"</label>
                            <Textarea value=fields.description attr:rows=3 />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || saving.get())
                            on_click=submit
                        >
                            {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| modal.hide()
                        >
                            "Отмена"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
