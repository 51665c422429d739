//! Data access for the Categories collection.
//!
//! Controllers talk to [`CategoryFacade`]; results arrive through callbacks on
//! the UI thread. [`HttpCategoryFacade`] is the REST implementation.

use crate::shared::api_utils::api_url;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::common::{create_key, parse_key, AggregateRoot};
use contracts::shared::filter::{ListQuery, SearchFilter};
use gloo_net::http::{Request, Response};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Size limit of a freshly created model
pub const DEFAULT_SIZE_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    NotFound,
    Http(u16),
    Network(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "not found"),
            FetchError::Http(status) => write!(f, "HTTP {}", status),
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::Decode(e) => write!(f, "malformed data: {}", e),
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

pub type Completion<T> = Box<dyn FnOnce(Result<T, FetchError>)>;

/// Callbacks of one element binding.
///
/// `data_requested` fires when the fetch starts, `data_received` when the
/// response is in, then `change` with the bound entity (`None` when the key
/// resolves to nothing).
pub struct ElementEvents {
    pub data_requested: Box<dyn FnOnce()>,
    pub data_received: Box<dyn FnOnce()>,
    pub change: Box<dyn FnOnce(Result<Option<Category>, FetchError>)>,
}

pub trait CategoryFacade {
    fn create(&self, collection: &str, entity: Category, done: Completion<()>);

    fn update(&self, key_path: &str, entity: Category, done: Completion<()>);

    fn remove(&self, key_path: &str, done: Completion<()>);

    fn create_key(&self, collection: &str, id: CategoryId) -> String {
        create_key(collection, &id)
    }

    fn set_use_batch(&self, use_batch: bool);

    fn set_size_limit(&self, limit: usize);

    fn size_limit(&self) -> usize;

    fn bind_element(&self, key_path: &str, events: ElementEvents);

    /// Fetch the collection with all `filters` applied, capped at the size limit
    fn read_list(&self, collection: &str, filters: &[SearchFilter], done: Completion<Vec<Category>>);
}

/// REST endpoint of a collection path: `/Categories` -> `/api/categories`
pub fn collection_endpoint(collection: &str) -> String {
    format!("/api{}", collection.to_lowercase())
}

/// Endpoint of the entity addressed by a key path
pub fn element_endpoint(key_path: &str) -> Option<String> {
    let open = key_path.find('(')?;
    let collection = &key_path[..open];
    let id = parse_key::<CategoryId>(collection, key_path)?;
    Some(format!("{}/{}", collection_endpoint(collection), id.value()))
}

/// Endpoint of a filtered list fetch, capped at `size_limit` rows
pub fn list_endpoint(
    collection: &str,
    filters: &[SearchFilter],
    size_limit: usize,
) -> Result<String, FetchError> {
    let query = ListQuery::from_filters(filters, Some(size_limit as u64));
    let qs = serde_qs::to_string(&query).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(format!("{}?{}", collection_endpoint(collection), qs))
}

fn check_status(response: &Response) -> Result<(), FetchError> {
    match response.status() {
        404 => Err(FetchError::NotFound),
        s if !response.ok() => Err(FetchError::Http(s)),
        _ => Ok(()),
    }
}

async fn fetch_list(url: String) -> Result<Vec<Category>, FetchError> {
    let response = Request::get(&url).send().await?;
    check_status(&response)?;
    Ok(response.json::<Vec<Category>>().await?)
}

async fn fetch_element(url: String) -> Result<Option<Category>, FetchError> {
    let response = Request::get(&url).send().await?;
    match check_status(&response) {
        Ok(()) => Ok(Some(response.json::<Category>().await?)),
        Err(FetchError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

async fn post_entity(url: String, entity: Category) -> Result<(), FetchError> {
    let response = Request::post(&url).json(&entity)?.send().await?;
    check_status(&response)
}

async fn put_entity(url: String, entity: Category) -> Result<(), FetchError> {
    let response = Request::put(&url).json(&entity)?.send().await?;
    check_status(&response)
}

async fn delete_entity(url: String) -> Result<(), FetchError> {
    let response = Request::delete(&url).send().await?;
    check_status(&response)
}

/// Facade over the backend REST API.
///
/// Settings are shared between clones, the way one model instance is shared
/// by all views.
#[derive(Clone)]
pub struct HttpCategoryFacade {
    use_batch: Arc<AtomicBool>,
    size_limit: Arc<AtomicUsize>,
}

impl HttpCategoryFacade {
    pub fn new() -> Self {
        Self {
            use_batch: Arc::new(AtomicBool::new(true)),
            size_limit: Arc::new(AtomicUsize::new(DEFAULT_SIZE_LIMIT)),
        }
    }
}

impl Default for HttpCategoryFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFacade for HttpCategoryFacade {
    fn create(&self, collection: &str, entity: Category, done: Completion<()>) {
        let url = api_url(&collection_endpoint(collection));
        log::debug!("POST {} (ID {})", url, entity.id);
        spawn_local(async move {
            done(post_entity(url, entity).await);
        });
    }

    fn update(&self, key_path: &str, entity: Category, done: Completion<()>) {
        let Some(endpoint) = element_endpoint(key_path) else {
            done(Err(FetchError::NotFound));
            return;
        };
        let url = api_url(&endpoint);
        log::debug!("PUT {}", url);
        spawn_local(async move {
            done(put_entity(url, entity).await);
        });
    }

    fn remove(&self, key_path: &str, done: Completion<()>) {
        let Some(endpoint) = element_endpoint(key_path) else {
            done(Err(FetchError::NotFound));
            return;
        };
        let url = api_url(&endpoint);
        log::debug!("DELETE {}", url);
        spawn_local(async move {
            done(delete_entity(url).await);
        });
    }

    fn set_use_batch(&self, use_batch: bool) {
        // REST backend has no $batch endpoint, requests always go one by one
        log::debug!("use batch: {}", use_batch);
        self.use_batch.store(use_batch, Ordering::Relaxed);
    }

    fn set_size_limit(&self, limit: usize) {
        self.size_limit.store(limit, Ordering::Relaxed);
    }

    fn size_limit(&self) -> usize {
        self.size_limit.load(Ordering::Relaxed)
    }

    fn bind_element(&self, key_path: &str, events: ElementEvents) {
        let ElementEvents {
            data_requested,
            data_received,
            change,
        } = events;

        let Some(endpoint) = element_endpoint(key_path) else {
            log::debug!("bind '{}': not a key path of a category", key_path);
            change(Ok(None));
            return;
        };
        let url = api_url(&endpoint);
        log::debug!(
            "bind element {} (batch: {})",
            url,
            self.use_batch.load(Ordering::Relaxed)
        );

        data_requested();
        spawn_local(async move {
            let result = fetch_element(url).await;
            data_received();
            change(result);
        });
    }

    fn read_list(&self, collection: &str, filters: &[SearchFilter], done: Completion<Vec<Category>>) {
        let url = match list_endpoint(collection, filters, self.size_limit()) {
            Ok(endpoint) => api_url(&endpoint),
            Err(e) => {
                log::error!("list query of {}: {}", collection, e);
                done(Err(e));
                return;
            }
        };
        log::debug!("GET {}", url);
        spawn_local(async move {
            done(fetch_list(url).await);
        });
    }
}

/// Collection path of categories, `/Categories`
pub fn categories_path() -> String {
    Category::collection_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(collection_endpoint("/Categories"), "/api/categories");
        assert_eq!(
            element_endpoint("/Categories(42)").as_deref(),
            Some("/api/categories/42")
        );
        assert_eq!(element_endpoint("/Categories(abc)"), None);
        assert_eq!(element_endpoint("/Categories"), None);
    }

    #[test]
    fn test_size_limit_shared_between_clones() {
        let facade = HttpCategoryFacade::new();
        assert_eq!(facade.size_limit(), DEFAULT_SIZE_LIMIT);
        facade.clone().set_size_limit(100_000);
        assert_eq!(facade.size_limit(), 100_000);
    }

    #[test]
    fn test_list_endpoint_carries_filters_and_limit() {
        let filters = vec![SearchFilter::name_contains("Sea")];
        assert_eq!(
            list_endpoint("/Categories", &filters, 100).as_deref(),
            Ok("/api/categories?top=100&name_contains=Sea")
        );
        assert_eq!(
            list_endpoint("/Categories", &[SearchFilter::id_equals("8")], 5).as_deref(),
            Ok("/api/categories?top=5&id=8")
        );
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Http(500).to_string(), "HTTP 500");
        assert_eq!(FetchError::NotFound.to_string(), "not found");
    }
}
