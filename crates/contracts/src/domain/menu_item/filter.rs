use serde::{Deserialize, Serialize};

/// Current search/category/price constraints applied to the menu listing.
///
/// Field names serialize to the remote API's query-parameter vocabulary
/// (`q` for free-text search, camelCase for the rest). Unset fields are
/// omitted from the query entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    #[serde(rename = "isAvailable", skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl Default for MenuFilter {
    /// The listing starts out showing available items only.
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            is_available: Some(true),
            page: None,
            limit: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl MenuFilter {
    /// An entirely empty patch; start here and set the fields to change.
    pub fn patch() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            is_available: None,
            page: None,
            limit: None,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Overlay `patch` onto `self`: a set field in the patch wins, an unset
    /// one leaves the current value untouched. Empty strings in the patch
    /// clear their field (how the UI expresses "remove this constraint").
    pub fn merge(&self, patch: &MenuFilter) -> Self {
        fn text(cur: &Option<String>, new: &Option<String>) -> Option<String> {
            match new {
                Some(s) if s.trim().is_empty() => None,
                Some(s) => Some(s.clone()),
                None => cur.clone(),
            }
        }

        Self {
            category: text(&self.category, &patch.category),
            search: text(&self.search, &patch.search),
            min_price: patch.min_price.or(self.min_price),
            max_price: patch.max_price.or(self.max_price),
            is_available: patch.is_available.or(self.is_available),
            page: patch.page.or(self.page),
            limit: patch.limit.or(self.limit),
            sort_by: text(&self.sort_by, &patch.sort_by),
            sort_order: text(&self.sort_order, &patch.sort_order),
        }
    }

    /// Number of user-visible constraints in effect (filter badge).
    pub fn active_count(&self) -> usize {
        let mut n = 0;
        if self.category.is_some() {
            n += 1;
        }
        if self.search.is_some() {
            n += 1;
        }
        if self.min_price.is_some() {
            n += 1;
        }
        if self.max_price.is_some() {
            n += 1;
        }
        // The default (available only) is not a user choice.
        if self.is_available == Some(false) {
            n += 1;
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_set_fields_win() {
        let current = MenuFilter {
            category: Some("protein".into()),
            search: Some("suya".into()),
            ..MenuFilter::default()
        };
        let mut patch = MenuFilter::patch();
        patch.category = Some("dessert".into());

        let merged = current.merge(&patch);
        assert_eq!(merged.category.as_deref(), Some("dessert"));
        assert_eq!(merged.search.as_deref(), Some("suya"));
        assert_eq!(merged.is_available, Some(true));
    }

    #[test]
    fn merge_empty_string_clears() {
        let current = MenuFilter {
            search: Some("suya".into()),
            ..MenuFilter::default()
        };
        let mut patch = MenuFilter::patch();
        patch.search = Some(String::new());

        let merged = current.merge(&patch);
        assert_eq!(merged.search, None);
    }

    #[test]
    fn active_count_ignores_default_availability() {
        assert_eq!(MenuFilter::default().active_count(), 0);

        let f = MenuFilter {
            category: Some("soups".into()),
            min_price: Some(1000.0),
            is_available: Some(false),
            ..MenuFilter::default()
        };
        assert_eq!(f.active_count(), 3);
    }
}
