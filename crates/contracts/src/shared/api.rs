use serde::{Deserialize, Serialize};

/// Uniform JSON envelope every remote endpoint responds with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

fn none<T>() -> Option<T> {
    None
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Collection endpoints respond with either a bare array or a paginated
/// object carrying the array under `items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListData<T> {
    Plain(Vec<T>),
    Paged { items: Vec<T> },
}

impl<T> ListData<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListData::Plain(items) => items,
            ListData::Paged { items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_message_only() {
        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success": false, "message": "Not found"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Not found"));
    }

    #[test]
    fn list_data_accepts_both_shapes() {
        let plain: ListData<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(plain.into_items(), vec![1, 2, 3]);

        let paged: ListData<u32> = serde_json::from_str(r#"{"items": [4, 5]}"#).unwrap();
        assert_eq!(paged.into_items(), vec![4, 5]);
    }

    #[test]
    fn pagination_camel_case() {
        let env: ApiEnvelope<ListData<u32>> = serde_json::from_str(
            r#"{"success": true, "data": {"items": []}, "pagination": {"page": 2, "limit": 20, "total": 55, "totalPages": 3}}"#,
        )
        .unwrap();
        let p = env.pagination.unwrap();
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 3);
    }
}
