use super::view_model::{create_state, ObjectViewModel};
use crate::domain::a001_category::model::{CategoryFacade, HttpCategoryFacade};
use crate::routes::{AppRouter, Navigator, Route, Screen};
use crate::shared::i18n::ResourceBundle;
use crate::shared::icons::icon;
use crate::shared::message_box::{MessageBoxService, MessageSink};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails() -> impl IntoView {
    let facade = expect_context::<HttpCategoryFacade>();
    let router = expect_context::<AppRouter>();
    let messages = expect_context::<MessageBoxService>();
    let bundle = ResourceBundle::default();

    let state = create_state();
    let view_model = ObjectViewModel::new(
        state,
        Rc::new(facade) as Rc<dyn CategoryFacade>,
        Rc::new(router) as Rc<dyn Navigator>,
        Rc::new(messages) as Rc<dyn MessageSink>,
    );

    let scope = view_model.scope().clone();
    on_cleanup(move || scope.invalidate());

    let vm = StoredValue::new_local(view_model);

    // Re-match on every object route while the page stays mounted
    Effect::new(move |_| {
        if let Screen::Route(Route::Object { object_id }) = router.screen.get() {
            vm.try_with_value(|vm| vm.on_object_matched(&object_id));
        }
    });

    let fields = move || state.with(|s| s.mode.fields());
    let buttons = move || state.with(|s| s.mode.buttons());

    view! {
        <div class="page details-container" class:busy=move || state.with(|s| s.busy)>
            <div class="page-header">
                <button class="button button--ghost" on:click=move |_| vm.with_value(|vm| vm.on_nav_back())>
                    {icon("back")}
                    {bundle.text("btnBack")}
                </button>
                <h1>{bundle.text("objectTitle")}</h1>
                <div class="page-header__actions">
                    <a
                        class="button button--ghost"
                        title=bundle.text("shareSendEmail")
                        href=move || state.with(|s| {
                            format!(
                                "mailto:?subject={}&body={}",
                                urlencoding::encode(&s.share_subject),
                                urlencoding::encode(&s.share_message)
                            )
                        })
                    >
                        {icon("mail")}
                    </a>
                </div>
            </div>

            <Show when=move || state.with(|s| s.busy)>
                <div class="busy-indicator">{bundle.text("loading")}</div>
            </Show>

            <div class="details-form">
                <div class="form-group">
                    <label for="category-id">{bundle.text("labelId")}</label>
                    <input
                        type="text"
                        id="category-id"
                        inputmode="numeric"
                        readonly=move || !fields().id_editable
                        prop:value=move || state.with(|s| s.form.id_text.clone())
                        on:input=move |ev| vm.with_value(|vm| vm.set_id_text(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="category-name">{bundle.text("labelName")}</label>
                    <input
                        type="text"
                        id="category-name"
                        readonly=move || !fields().name_editable
                        prop:value=move || state.with(|s| s.form.name_text.clone())
                        on:input=move |ev| vm.with_value(|vm| vm.set_name_text(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    class:hidden=move || !buttons().create
                    disabled=move || state.with(|s| s.busy)
                    on:click=move |_| vm.with_value(|vm| vm.on_create())
                >
                    {icon("plus")}
                    {bundle.text("btnCreate")}
                </button>
                <button
                    class="button button--secondary"
                    class:hidden=move || !buttons().edit
                    on:click=move |_| vm.with_value(|vm| vm.on_edit())
                >
                    {icon("edit")}
                    {bundle.text("btnEdit")}
                </button>
                <button
                    class="button button--danger"
                    class:hidden=move || !buttons().delete
                    disabled=move || state.with(|s| s.busy)
                    on:click=move |_| vm.with_value(|vm| vm.on_delete())
                >
                    {icon("delete")}
                    {bundle.text("btnDelete")}
                </button>
                <button
                    class="button button--primary"
                    class:hidden=move || !buttons().save
                    disabled=move || state.with(|s| s.busy)
                    on:click=move |_| vm.with_value(|vm| vm.on_save())
                >
                    {icon("save")}
                    {bundle.text("btnSave")}
                </button>
            </div>
        </div>
    }
}
