use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a menu item, assigned by the remote API.
///
/// The API uses document-style ids serialized as `_id`; the client treats
/// them as opaque strings and never mints its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A sellable food entry with price, category and descriptive metadata.
///
/// Owned by the remote API; the client only ever holds a transient,
/// fully-replaceable cached copy (see the menu provider).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: MenuItemId,

    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,

    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default = "default_available")]
    pub is_available: bool,

    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,

    /// Preparation time in minutes.
    #[serde(default)]
    pub preparation_time: u32,

    /// 1 (mild) .. 5 (very hot).
    #[serde(default = "default_spicy_level")]
    pub spicy_level: u8,

    /// Free-form nutrition block; the API does not constrain its shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<serde_json::Value>,

    // Older records predate lifecycle tracking and lack these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_available() -> bool {
    true
}

fn default_spicy_level() -> u8 {
    1
}

impl MenuItem {
    /// First usable image URL, if the item carries any.
    pub fn primary_image(&self) -> Option<&str> {
        self.featured_image
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.images.first().map(String::as_str).filter(|u| !u.is_empty()))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload for a menu item.
///
/// `id` present means update; absent means create. The API rejects an
/// explicit `_id: null`, hence the skip on serialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,

    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,

    pub is_available: bool,

    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,

    pub preparation_time: u32,
    pub spicy_level: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<serde_json::Value>,
}

impl MenuItemDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        if !(self.price > 0.0) {
            return Err("Price must be greater than zero".into());
        }
        if !(1..=5).contains(&self.spicy_level) {
            return Err("Spicy level must be between 1 and 5".into());
        }
        Ok(())
    }
}

impl From<MenuItem> for MenuItemDto {
    fn from(item: MenuItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name,
            price: item.price,
            description: item.description,
            category: item.category,
            featured_image: item.featured_image,
            images: item.images,
            is_available: item.is_available,
            ingredients: item.ingredients,
            allergens: item.allergens,
            preparation_time: item.preparation_time,
            spicy_level: item.spicy_level,
            nutritional_info: item.nutritional_info,
        }
    }
}

/// Lowest and highest item price currently on the menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "66f2a1b9c4d5e6f708091a2b",
            "name": "Peppered Goat Meat",
            "price": 4500,
            "description": "Slow-cooked goat meat in pepper sauce",
            "category": "peppersoup-corner",
            "featuredImage": "https://cdn.example.com/goat.webp",
            "images": ["https://cdn.example.com/goat-2.webp"],
            "isAvailable": true,
            "ingredients": ["goat meat", "scotch bonnet", "onions"],
            "allergens": [],
            "preparationTime": 25,
            "spicyLevel": 4,
            "createdAt": "2024-09-24T10:15:00Z"
        }"#
    }

    #[test]
    fn deserializes_remote_shape() {
        let item: MenuItem = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.id.as_str(), "66f2a1b9c4d5e6f708091a2b");
        assert_eq!(item.price, 4500.0);
        assert_eq!(item.spicy_level, 4);
        assert!(item.is_available);
        assert_eq!(item.primary_image(), Some("https://cdn.example.com/goat.webp"));
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn missing_optionals_take_defaults() {
        let item: MenuItem = serde_json::from_str(
            r#"{"_id": "1", "name": "Chapman", "price": 1200, "category": "beverage"}"#,
        )
        .unwrap();
        assert!(item.is_available);
        assert_eq!(item.spicy_level, 1);
        assert!(item.ingredients.is_empty());
        assert_eq!(item.primary_image(), None);
    }

    #[test]
    fn dto_create_omits_id() {
        let dto = MenuItemDto {
            name: "Suya".into(),
            price: 2000.0,
            category: "protein".into(),
            is_available: true,
            spicy_level: 3,
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn dto_update_keeps_id() {
        let mut dto = MenuItemDto::default();
        dto.id = Some(MenuItemId::new("abc"));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["_id"], "abc");
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut dto = MenuItemDto {
            name: "Suya".into(),
            price: 2000.0,
            category: "protein".into(),
            is_available: true,
            spicy_level: 3,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.price = 0.0;
        assert!(dto.validate().is_err());
        dto.price = 2000.0;

        dto.spicy_level = 6;
        assert!(dto.validate().is_err());
        dto.spicy_level = 3;

        dto.name = "   ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn edit_prefill_round_trips() {
        let item: MenuItem = serde_json::from_str(sample_json()).unwrap();
        let dto = MenuItemDto::from(item.clone());
        assert_eq!(dto.id, Some(item.id));
        assert_eq!(dto.ingredients, item.ingredients);
        assert_eq!(dto.preparation_time, 25);
    }
}
