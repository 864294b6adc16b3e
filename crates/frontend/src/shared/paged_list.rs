//! Fetch lifecycle of a paginated list screen.

use contracts::shared::{Collection, PageQuery};
use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use super::api::{required_data, ApiResult, RequestTracker};
use super::data_grid::PageState;
use super::notifications::NotificationService;

type PageFetcher<T> = Arc<dyn Fn(PageQuery) -> LocalBoxFuture<'static, ApiResult<Collection<T>>> + Send + Sync>;

/// Rows and page state of one list screen.
///
/// `load` takes a request ticket so that only the latest page request may
/// update the rows; `loading` is cleared on every outcome.
pub struct PagedList<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub page: RwSignal<PageState>,
    pub loading: RwSignal<bool>,
    pub total: RwSignal<u64>,
    pub search: RwSignal<String>,
    tracker: StoredValue<RequestTracker>,
    fetcher: StoredValue<PageFetcher<T>>,
    notifications: NotificationService,
}

impl<T: Send + Sync + 'static> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedList<T> {}

impl<T: Send + Sync + 'static> PagedList<T> {
    pub fn new<F>(page_size: usize, notifications: NotificationService, fetcher: F) -> Self
    where
        F: Fn(PageQuery) -> LocalBoxFuture<'static, ApiResult<Collection<T>>> + Send + Sync + 'static,
    {
        Self {
            rows: RwSignal::new(Vec::new()),
            page: RwSignal::new(PageState::new(page_size)),
            loading: RwSignal::new(false),
            total: RwSignal::new(0),
            search: RwSignal::new(String::new()),
            tracker: StoredValue::new(RequestTracker::new()),
            fetcher: StoredValue::new(Arc::new(fetcher)),
            notifications,
        }
    }

    /// Fetch `page`; the page index is translated to the 1-based query here.
    pub fn load(&self, page: PageState) {
        let tracker = self.tracker.get_value();
        let ticket = tracker.begin();
        let fetch = self.fetcher.get_value();
        let query = PageQuery::from_page_index(page.page_index, page.page_size)
            .with_search(&self.search.get_untracked());
        let this = *self;

        self.page.set(page);
        self.loading.set(true);

        spawn_local(async move {
            let result = fetch(query).await;
            if !tracker.is_current(ticket) {
                log::debug!("discarding stale response for page {}", page.page_index + 1);
                return;
            }

            let pagination = result.as_ref().ok().and_then(|ok| ok.pagination);
            match result.and_then(required_data) {
                Ok(collection) => {
                    let items = collection.into_items();
                    match pagination {
                        Some(p) => {
                            this.page.set(page.with_pagination(&p));
                            this.total.set(p.total);
                        }
                        None => {
                            this.page.set(PageState { page_count: 1, ..page });
                            this.total.set(items.len() as u64);
                        }
                    }
                    this.rows.set(items);
                }
                Err(e) => {
                    log::warn!("failed to load page {}: {}", page.page_index + 1, e);
                    this.rows.set(Vec::new());
                    this.notifications.report(&e);
                }
            }
            this.loading.set(false);
        });
    }

    pub fn reload(&self) {
        self.load(self.page.get_untracked());
    }

    /// Back to the first page, e.g. after the search term changed
    pub fn restart(&self) {
        self.load(self.page.get_untracked().reset());
    }

    pub fn set_pagination(&self) -> Callback<PageState> {
        let this = *self;
        Callback::new(move |page| this.load(page))
    }
}
