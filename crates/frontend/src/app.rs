use crate::domain::a001_category::model::HttpCategoryFacade;
use crate::routes::routes::AppRoutes;
use crate::routes::AppRouter;
use crate::shared::message_box::{MessageBoxHost, MessageBoxService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Router reads the initial route from the URL and follows back/forward.
    let router = AppRouter::new();
    router.init();
    provide_context(router);

    // One data model shared by all pages
    provide_context(HttpCategoryFacade::new());

    provide_context(MessageBoxService::new());

    view! {
        <AppRoutes />
        <MessageBoxHost />
    }
}
