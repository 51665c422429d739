pub mod state;
pub mod view_model;

use self::state::create_state;
use self::view_model::WorklistViewModel;
use crate::domain::a001_category::model::{CategoryFacade, HttpCategoryFacade};
use crate::routes::{AppRouter, Navigator};
use crate::shared::i18n::ResourceBundle;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::rc::Rc;

fn mailto_href(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryWorklist() -> impl IntoView {
    let facade = expect_context::<HttpCategoryFacade>();
    let router = expect_context::<AppRouter>();
    let bundle = ResourceBundle::default();

    let state = create_state();
    let view_model = WorklistViewModel::new(
        state,
        Rc::new(facade) as Rc<dyn CategoryFacade>,
        Rc::new(router) as Rc<dyn Navigator>,
    );
    view_model.initialize();

    let scope = view_model.scope().clone();
    on_cleanup(move || scope.invalidate());

    let vm = StoredValue::new_local(view_model);

    let on_key_search = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            vm.with_value(|vm| vm.search_current());
        }
    };

    view! {
        <div class="page worklist" class:busy=move || state.with(|s| s.busy)>
            <div class="page-header">
                <h1>{bundle.text("worklistTitle")}</h1>
                <div class="page-header__actions">
                    <a
                        class="button button--ghost"
                        title=bundle.text("shareSendEmail")
                        href=move || state.with(|s| mailto_href(&s.share_subject, &s.share_message))
                    >
                        {icon("mail")}
                    </a>
                </div>
            </div>

            <div class="filter-bar">
                <label class="filter-bar__field">
                    <span>{bundle.text("labelId")}</span>
                    <input
                        type="text"
                        inputmode="numeric"
                        prop:value=move || state.with(|s| s.search_id.clone())
                        on:input=move |ev| vm.with_value(|vm| vm.set_search_id(event_target_value(&ev)))
                        on:keydown=on_key_search
                    />
                </label>
                <label class="filter-bar__field">
                    <span>{bundle.text("labelName")}</span>
                    <div class="input-with-help">
                        <input
                            type="text"
                            prop:value=move || state.with(|s| s.search_name.clone())
                            on:input=move |ev| vm.with_value(|vm| vm.set_search_name(event_target_value(&ev)))
                            on:keydown=on_key_search
                        />
                        <button
                            class="button button--icon"
                            title=bundle.text("valueHelpTitle")
                            on:click=move |_| {
                                let input = state.with_untracked(|s| s.search_name.clone());
                                vm.with_value(|vm| vm.on_value_help_request(&input));
                            }
                        >
                            {icon("value-help")}
                        </button>
                    </div>
                </label>
                <button class="button button--primary" on:click=move |_| vm.with_value(|vm| vm.search_current())>
                    {icon("search")}
                    {bundle.text("btnSearch")}
                </button>
            </div>

            <div class="table-toolbar">
                <h2 class="table-title">{move || state.with(|s| s.table_title.clone())}</h2>
                <div class="table-toolbar__actions">
                    <button class="button button--secondary" on:click=move |_| vm.with_value(|vm| vm.on_refresh())>
                        {icon("refresh")}
                        {bundle.text("btnRefresh")}
                    </button>
                    <button class="button button--primary" on:click=move |_| vm.with_value(|vm| vm.on_create())>
                        {icon("plus")}
                        {bundle.text("btnNew")}
                    </button>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__cell--id">{bundle.text("labelId")}</th>
                        <th>{bundle.text("labelName")}</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.binding.items().to_vec())
                        key=|c: &Category| (c.id.value(), c.name.clone())
                        children=move |c: Category| {
                            let path = c.key_path();
                            view! {
                                <tr class="table__row--clickable" on:click=move |_| vm.with_value(|vm| vm.on_press(&path))>
                                    <td class="table__cell--id">{c.id.value()}</td>
                                    <td>{c.name.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || state.with(|s| s.binding.items().is_empty() && !s.busy)>
                <p class="table-empty">{move || state.with(|s| s.no_data_text.clone())}</p>
            </Show>

            <Show when=move || state.with(|s| s.value_help.open)>
                <Modal
                    title=bundle.text("valueHelpTitle")
                    on_close=Callback::new(move |_| vm.with_value(|vm| vm.on_value_help_close(None)))
                >
                    <input
                        type="search"
                        class="value-help__search"
                        placeholder=bundle.text("valueHelpSearch")
                        prop:value=move || state.with(|s| s.value_help.query.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.with_value(|vm| vm.on_value_help_search(&value));
                        }
                    />
                    <ul class="value-help__list">
                        <For
                            each=move || state.with(|s| s.value_help.binding.items().to_vec())
                            key=|c: &Category| c.id.value()
                            children=move |c: Category| {
                                let name = c.name.clone();
                                view! {
                                    <li
                                        class="value-help__item"
                                        on:click=move |_| vm.with_value(|vm| vm.on_value_help_close(Some(name.as_str())))
                                    >
                                        {c.name.clone()}
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <Show when=move || state.with(|s| {
                        s.value_help.binding.items().is_empty() && !s.value_help.binding.is_loading()
                    })>
                        <p class="table-empty">{bundle.text("valueHelpNoData")}</p>
                    </Show>
                </Modal>
            </Show>
        </div>
    }
}
