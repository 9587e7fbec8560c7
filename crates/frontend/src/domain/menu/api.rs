//! Menu endpoint calls, all through the shared API client.

use contracts::domain::menu_item::{MenuFilter, MenuItem, MenuItemDto, MenuItemId, PriceRange};
use contracts::shared::api::{ApiEnvelope, ListData};

use crate::shared::api;

/// Query string for the list endpoint; unset filter fields are omitted.
pub fn filter_query(filter: &MenuFilter) -> String {
    serde_qs::to_string(filter).unwrap_or_default()
}

fn list_path(filter: &MenuFilter) -> String {
    let query = filter_query(filter);
    if query.is_empty() {
        "/menu".to_string()
    } else {
        format!("/menu?{}", query)
    }
}

/// Unwrap a successful envelope's payload; a failed one yields its message.
fn unwrap_data<T>(env: ApiEnvelope<T>, fallback: &str) -> Result<T, String> {
    if env.success {
        env.data.ok_or_else(|| fallback.to_string())
    } else {
        Err(env.message.unwrap_or_else(|| fallback.to_string()))
    }
}

/// A failed envelope yields its message; a successful one is fine with or
/// without a payload (mutations respond with varying bodies).
fn expect_success<T>(env: ApiEnvelope<T>, fallback: &str) -> Result<(), String> {
    if env.success {
        Ok(())
    } else {
        Err(env.message.unwrap_or_else(|| fallback.to_string()))
    }
}

pub async fn fetch_menu_items(filter: &MenuFilter) -> Result<Vec<MenuItem>, String> {
    let env: ApiEnvelope<ListData<MenuItem>> = api::get_json(&list_path(filter))
        .await
        .map_err(|e| e.to_string())?;
    unwrap_data(env, "Failed to fetch menu items").map(ListData::into_items)
}

pub async fn fetch_menu_item(id: &MenuItemId) -> Result<MenuItem, String> {
    let env: ApiEnvelope<MenuItem> = api::get_json(&format!("/menu/{}", id))
        .await
        .map_err(|e| e.to_string())?;
    unwrap_data(env, "Menu item not found")
}

pub async fn fetch_categories() -> Result<Vec<String>, String> {
    let env: ApiEnvelope<Vec<String>> = api::get_json("/menu/categories")
        .await
        .map_err(|e| e.to_string())?;
    if env.success {
        Ok(env.data.unwrap_or_default())
    } else {
        Err(env.message.unwrap_or_else(|| "Failed to fetch categories".to_string()))
    }
}

pub async fn fetch_price_range() -> Result<PriceRange, String> {
    let env: ApiEnvelope<PriceRange> = api::get_json("/menu/price-range")
        .await
        .map_err(|e| e.to_string())?;
    if env.success {
        Ok(env.data.unwrap_or_default())
    } else {
        Err(env.message.unwrap_or_else(|| "Failed to fetch price range".to_string()))
    }
}

pub async fn create_menu_item(dto: &MenuItemDto) -> Result<(), String> {
    let env: ApiEnvelope<serde_json::Value> = api::post_json("/menu", dto)
        .await
        .map_err(|e| e.to_string())?;
    expect_success(env, "Failed to add menu item")
}

pub async fn update_menu_item(id: &MenuItemId, dto: &MenuItemDto) -> Result<(), String> {
    let env: ApiEnvelope<serde_json::Value> = api::put_json(&format!("/menu/{}", id), dto)
        .await
        .map_err(|e| e.to_string())?;
    expect_success(env, "Failed to update menu item")
}

pub async fn delete_menu_item(id: &MenuItemId) -> Result<(), String> {
    let env: ApiEnvelope<serde_json::Value> = api::delete_json(&format!("/menu/{}", id))
        .await
        .map_err(|e| e.to_string())?;
    expect_success(env, "Failed to delete menu item")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_queries_availability_only() {
        assert_eq!(filter_query(&MenuFilter::default()), "isAvailable=true");
        assert_eq!(list_path(&MenuFilter::default()), "/menu?isAvailable=true");
    }

    #[test]
    fn empty_filter_yields_bare_path() {
        assert_eq!(list_path(&MenuFilter::patch()), "/menu");
    }

    #[test]
    fn search_serializes_as_q() {
        let filter = MenuFilter {
            category: Some("soups-swallow".into()),
            search: Some("egusi".into()),
            ..MenuFilter::default()
        };
        let query = filter_query(&filter);
        assert_eq!(query, "category=soups-swallow&q=egusi&isAvailable=true");
    }

    #[test]
    fn price_bounds_and_paging_appear_when_set() {
        let filter = MenuFilter {
            min_price: Some(1000.0),
            max_price: Some(5000.0),
            page: Some(2),
            limit: Some(20),
            ..MenuFilter::default()
        };
        let query = filter_query(&filter);
        assert!(query.contains("minPrice="));
        assert!(query.contains("maxPrice="));
        assert!(query.contains("page=2"));
        assert!(query.contains("limit=20"));
        assert!(!query.contains("sortBy"));
    }
}
