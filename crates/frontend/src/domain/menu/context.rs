//! Menu state provider.
//!
//! Holds the cached item list, categories, price range and the active filter
//! set; exposes fetch/add/update/delete plus filter updates that trigger a
//! re-fetch. Every mutation is followed by an unconditional full re-fetch
//! rather than local cache patching.

use contracts::domain::menu_item::{MenuFilter, MenuItem, MenuItemDto, MenuItemId, PriceRange};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::api;

/// Monotonic ticket dispenser for list fetches.
///
/// Filter changes can fire fetches faster than responses return; a response
/// is applied only while its ticket is still the newest issued, so the list
/// always reflects the most recently *requested* filter, not whichever
/// response happened to arrive last.
#[derive(Clone, Default)]
pub struct FetchSequencer(Arc<AtomicU64>);

impl FetchSequencer {
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

/// Shared menu state. `Copy`, so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct MenuStore {
    pub items: RwSignal<Vec<MenuItem>>,
    pub categories: RwSignal<Vec<String>>,
    pub price_range: RwSignal<PriceRange>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub filter: RwSignal<MenuFilter>,
    seq: StoredValue<FetchSequencer>,
}

impl MenuStore {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            price_range: RwSignal::new(PriceRange::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            filter: RwSignal::new(MenuFilter::default()),
            seq: StoredValue::new(FetchSequencer::default()),
        }
    }

    /// Re-fetch the list with the filter currently in effect.
    pub fn fetch_items(self) {
        self.fetch_items_with(self.filter.get_untracked());
    }

    fn fetch_items_with(self, filter: MenuFilter) {
        let ticket = self.seq.get_value().begin();
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = api::fetch_menu_items(&filter).await;

            // A newer fetch owns the list (and the loading flag) now.
            if !self.seq.get_value().is_current(ticket) {
                return;
            }

            match result {
                Ok(items) => {
                    self.items.set(items);
                }
                Err(e) => {
                    log::error!("fetch menu items failed: {}", e);
                    self.error.set(Some(e));
                    self.items.set(Vec::new());
                }
            }
            self.loading.set(false);
        });
    }

    pub fn fetch_categories(self) {
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(categories) => self.categories.set(categories),
                Err(e) => log::warn!("fetch categories failed: {}", e),
            }
        });
    }

    pub fn fetch_price_range(self) {
        spawn_local(async move {
            match api::fetch_price_range().await {
                Ok(range) => self.price_range.set(range),
                Err(e) => log::warn!("fetch price range failed: {}", e),
            }
        });
    }

    /// Merge a partial filter into the active one and re-fetch with it.
    pub fn set_filter(self, patch: MenuFilter) {
        let merged = self.filter.get_untracked().merge(&patch);
        self.filter.set(merged.clone());
        self.fetch_items_with(merged);
    }

    /// Reset every constraint and re-fetch.
    pub fn clear_filter(self) {
        let defaults = MenuFilter::default();
        self.filter.set(defaults.clone());
        self.fetch_items_with(defaults);
    }

    /// Fetch one item by id, bypassing the cached list (detail page
    /// fallback for direct links).
    pub async fn fetch_item(self, id: MenuItemId) -> Result<MenuItem, String> {
        api::fetch_menu_item(&id).await
    }

    pub async fn add_item(self, dto: MenuItemDto) -> Result<(), String> {
        dto.validate()?;
        self.loading.set(true);
        let result = api::create_menu_item(&dto).await;
        self.loading.set(false);
        match result {
            Ok(()) => {
                self.fetch_items();
                Ok(())
            }
            Err(e) => {
                log::error!("add menu item failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn update_item(self, id: MenuItemId, dto: MenuItemDto) -> Result<(), String> {
        dto.validate()?;
        self.loading.set(true);
        let result = api::update_menu_item(&id, &dto).await;
        self.loading.set(false);
        match result {
            Ok(()) => {
                self.fetch_items();
                Ok(())
            }
            Err(e) => {
                log::error!("update menu item failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn delete_item(self, id: MenuItemId) -> Result<(), String> {
        self.loading.set(true);
        let result = api::delete_menu_item(&id).await;
        self.loading.set(false);
        match result {
            Ok(()) => {
                self.fetch_items();
                Ok(())
            }
            Err(e) => {
                log::error!("delete menu item failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Menu context provider component; kicks off the initial loads on mount.
#[component]
pub fn MenuProvider(children: ChildrenFn) -> impl IntoView {
    let store = MenuStore::new();
    provide_context(store);

    store.fetch_items();
    store.fetch_categories();
    store.fetch_price_range();

    children()
}

/// Hook to access menu state.
pub fn use_menu() -> MenuStore {
    use_context::<MenuStore>().expect("MenuProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let seq = FetchSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let seq = FetchSequencer::default();
        let first = seq.begin();
        let second = seq.begin();

        // The slower first response must be discarded, the second applied.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn reissue_invalidates_again() {
        let seq = FetchSequencer::default();
        let a = seq.begin();
        assert!(seq.is_current(a));
        let b = seq.begin();
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }
}
