//! Logical routes and browser history integration.
//!
//! The current route lives in the query string (`?route=object&objectId=42`)
//! and the depth of our own history entries is kept in `history.state`, so
//! the object page can tell whether a back step stays inside the app.

use crate::shared::api_utils::location_href;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, PopStateEvent};

/// Object id that opens the object page in create mode
pub const NEW_OBJECT_ID: &str = "new";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Worklist,
    Object { object_id: String },
}

/// Views shown without a URL change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    ObjectNotFound,
}

/// What is on screen right now
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Route(Route),
    Target(Target),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    object_id: Option<String>,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Worklist => "worklist",
            Route::Object { .. } => "object",
        }
    }

    /// Query string for this route, without the leading `?`
    pub fn to_query(&self) -> String {
        let params = RouteParams {
            route: Some(self.name().to_string()),
            object_id: match self {
                Route::Object { object_id } => Some(object_id.clone()),
                Route::Worklist => None,
            },
        };
        serde_qs::to_string(&params).unwrap_or_default()
    }

    /// Parse a `location.search` string. Anything unknown is the worklist.
    pub fn from_query(search: &str) -> Route {
        let params: RouteParams =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match (params.route.as_deref(), params.object_id) {
            (Some("object"), Some(object_id)) if !object_id.is_empty() => {
                Route::Object { object_id }
            }
            _ => Route::Worklist,
        }
    }
}

/// Navigation seen from the controllers.
pub trait Navigator {
    fn nav_to(&self, route: Route, replace_history: bool);

    /// Show a target without changing the URL
    fn display_target(&self, target: Target);

    fn history_back(&self);

    /// True when a back step lands on a page of this app
    fn has_previous_entry(&self) -> bool;

    /// Address of the current page, used in share texts
    fn location_href(&self) -> String;
}

/// Router backed by `window.history`.
#[derive(Clone, Copy)]
pub struct AppRouter {
    pub screen: RwSignal<Screen>,
    depth: RwSignal<u32>,
}

impl AppRouter {
    pub fn new() -> Self {
        Self {
            screen: RwSignal::new(Screen::Route(Route::Worklist)),
            depth: RwSignal::new(0),
        }
    }

    /// Read the initial route from the location and follow back/forward.
    pub fn init(&self) {
        let Some(w) = window() else {
            return;
        };
        let search = w.location().search().unwrap_or_default();
        self.screen.set(Screen::Route(Route::from_query(&search)));

        let depth = w
            .history()
            .ok()
            .and_then(|h| h.state().ok())
            .and_then(|s| s.as_f64())
            .map(|d| d as u32);
        match depth {
            Some(d) => self.depth.set(d),
            None => {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state(&JsValue::from_f64(0.0), "");
                }
            }
        }

        let this = *self;
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let depth = event
                .dyn_ref::<PopStateEvent>()
                .and_then(|e| e.state().as_f64())
                .map(|d| d as u32)
                .unwrap_or(0);
            let search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let route = Route::from_query(&search);
            log::debug!("popstate: route '{}', depth {}", route.name(), depth);
            this.depth.set(depth);
            this.screen.set(Screen::Route(route));
        }) as Box<dyn FnMut(_)>);
        let _ = w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for AppRouter {
    fn nav_to(&self, route: Route, replace_history: bool) {
        let url = format!("?{}", route.to_query());
        log::info!("navigate to '{}' (replace: {})", url, replace_history);

        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if replace_history {
                let depth = self.depth.get_untracked();
                let _ = history.replace_state_with_url(
                    &JsValue::from_f64(depth as f64),
                    "",
                    Some(&url),
                );
            } else {
                let depth = self.depth.get_untracked() + 1;
                if history
                    .push_state_with_url(&JsValue::from_f64(depth as f64), "", Some(&url))
                    .is_ok()
                {
                    self.depth.set(depth);
                }
            }
        }
        self.screen.set(Screen::Route(route));
    }

    fn display_target(&self, target: Target) {
        log::info!("display target {:?}", target);
        self.screen.set(Screen::Target(target));
    }

    fn history_back(&self) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }

    fn has_previous_entry(&self) -> bool {
        self.depth.get_untracked() > 0
    }

    fn location_href(&self) -> String {
        location_href()
    }
}
