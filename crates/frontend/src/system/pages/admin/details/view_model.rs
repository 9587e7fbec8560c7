use contracts::domain::menu_item::{MenuItem, MenuItemDto, MenuItemId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::menu::context::MenuStore;

/// Editable form state. Numeric fields stay strings while typing and are
/// parsed once on save; list fields are comma-separated text.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemForm {
    pub id: Option<MenuItemId>,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    pub is_available: bool,
    pub ingredients: String,
    pub allergens: String,
    pub preparation_time: String,
    pub spicy_level: String,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            price: String::new(),
            description: String::new(),
            category: String::new(),
            featured_image: None,
            images: Vec::new(),
            is_available: true,
            ingredients: String::new(),
            allergens: String::new(),
            preparation_time: String::new(),
            spicy_level: "1".to_string(),
        }
    }
}

/// "a, b ,c," -> ["a", "b", "c"]
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_list(values: &[String]) -> String {
    values.join(", ")
}

impl MenuItemForm {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            price: item.price.to_string(),
            description: item.description.clone(),
            category: item.category.clone(),
            featured_image: item.featured_image.clone(),
            images: item.images.clone(),
            is_available: item.is_available,
            ingredients: join_list(&item.ingredients),
            allergens: join_list(&item.allergens),
            preparation_time: item.preparation_time.to_string(),
            spicy_level: item.spicy_level.to_string(),
        }
    }

    /// Parse into the wire DTO. Number fields follow the form's lenient
    /// reading: empty prep time means 0, an unreadable spice level means 1.
    pub fn to_dto(&self) -> Result<MenuItemDto, String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;

        let dto = MenuItemDto {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            price,
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            featured_image: self.featured_image.clone(),
            images: self.images.clone(),
            is_available: self.is_available,
            ingredients: split_list(&self.ingredients),
            allergens: split_list(&self.allergens),
            preparation_time: self.preparation_time.trim().parse().unwrap_or(0),
            spicy_level: self.spicy_level.trim().parse().unwrap_or(1),
            nutritional_info: None,
        };
        dto.validate()?;
        Ok(dto)
    }
}

/// ViewModel for the menu item details form.
#[derive(Clone, Copy)]
pub struct MenuItemDetailsViewModel {
    pub form: RwSignal<MenuItemForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    store: MenuStore,
}

impl MenuItemDetailsViewModel {
    pub fn new(store: MenuStore, editing: Option<&MenuItem>) -> Self {
        let form = match editing {
            Some(item) => MenuItemForm::from_item(item),
            None => MenuItemForm::default(),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            store,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.read().id.is_some()
    }

    /// Save through the menu provider, so the list re-fetches afterwards.
    pub fn save_command(self, on_saved: Callback<()>) {
        let dto = match self.form.get_untracked().to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        self.saving.set(true);
        self.error.set(None);

        let store = self.store;
        spawn_local(async move {
            let result = match dto.id.clone() {
                Some(id) => store.update_item(id, dto).await,
                None => store.add_item(dto).await,
            };
            self.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => self.error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MenuItemForm {
        MenuItemForm {
            name: "Egusi Soup".into(),
            price: "3500".into(),
            category: "soups-swallow".into(),
            ingredients: "melon seeds, spinach , palm oil,".into(),
            preparation_time: "30".into(),
            spicy_level: "2".into(),
            ..MenuItemForm::default()
        }
    }

    #[test]
    fn to_dto_parses_numbers_and_lists() {
        let dto = filled_form().to_dto().unwrap();
        assert_eq!(dto.price, 3500.0);
        assert_eq!(dto.preparation_time, 30);
        assert_eq!(dto.spicy_level, 2);
        assert_eq!(dto.ingredients, vec!["melon seeds", "spinach", "palm oil"]);
        assert!(dto.allergens.is_empty());
        assert!(dto.id.is_none());
    }

    #[test]
    fn to_dto_rejects_unparseable_price() {
        let mut form = filled_form();
        form.price = "a lot".into();
        assert_eq!(form.to_dto().unwrap_err(), "Price must be a number");
    }

    #[test]
    fn to_dto_is_lenient_about_optional_numbers() {
        let mut form = filled_form();
        form.preparation_time = String::new();
        form.spicy_level = "hot".into();
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.preparation_time, 0);
        assert_eq!(dto.spicy_level, 1);
    }

    #[test]
    fn to_dto_runs_validation() {
        let mut form = filled_form();
        form.category = String::new();
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn round_trip_through_item() {
        let item: MenuItem = serde_json::from_str(
            r#"{
                "_id": "m1",
                "name": "Pepper Soup",
                "price": 2500,
                "category": "peppersoup-corner",
                "ingredients": ["catfish", "uziza"],
                "preparationTime": 20,
                "spicyLevel": 5
            }"#,
        )
        .unwrap();

        let form = MenuItemForm::from_item(&item);
        assert_eq!(form.ingredients, "catfish, uziza");
        assert_eq!(form.spicy_level, "5");

        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id.unwrap().as_str(), "m1");
        assert_eq!(dto.ingredients, vec!["catfish", "uziza"]);
    }
}
