use crate::routes::{AppRouter, Navigator, Route};
use crate::shared::i18n::ResourceBundle;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Shown for the object-not-found target
#[component]
#[allow(non_snake_case)]
pub fn NotFound() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let bundle = ResourceBundle::default();

    view! {
        <div class="page not-found">
            <h1>{bundle.text("notFoundTitle")}</h1>
            <p>{bundle.text("objectNotFoundText")}</p>
            <a
                href=format!("?{}", Route::Worklist.to_query())
                on:click=move |ev| {
                    ev.prevent_default();
                    router.nav_to(Route::Worklist, false);
                }
            >
                {icon("back")}
                {bundle.text("backToWorklist")}
            </a>
        </div>
    }
}
