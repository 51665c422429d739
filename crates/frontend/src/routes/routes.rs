use super::router::{AppRouter, Route, Screen};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryWorklist;
use crate::domain::a001_category::ui::not_found::NotFound;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Worklist,
    Object,
    NotFound,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = expect_context::<AppRouter>();

    // Object pages are re-matched inside CategoryDetails; only a change of
    // page kind remounts.
    let page = Memo::new(move |_| match router.screen.get() {
        Screen::Route(Route::Worklist) => Page::Worklist,
        Screen::Route(Route::Object { .. }) => Page::Object,
        Screen::Target(_) => Page::NotFound,
    });

    view! {
        <main class="app-main">
            {move || match page.get() {
                Page::Worklist => view! { <CategoryWorklist /> }.into_any(),
                Page::Object => view! { <CategoryDetails /> }.into_any(),
                Page::NotFound => view! { <NotFound /> }.into_any(),
            }}
        </main>
    }
}
