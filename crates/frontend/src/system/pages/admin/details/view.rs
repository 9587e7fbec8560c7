use contracts::domain::menu_item::MenuItem;
use leptos::prelude::*;

use super::view_model::MenuItemDetailsViewModel;
use crate::domain::menu::context::use_menu;
use crate::shared::icons::icon;
use crate::shared::upload::ImageUpload;

/// Categories offered when the API has not supplied any yet.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "appetizer",
    "main-course",
    "dessert",
    "beverage",
    "side-dish",
    "special",
];

#[component]
pub fn MenuItemDetails(
    item: Option<MenuItem>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_menu();
    let vm = MenuItemDetailsViewModel::new(store, item.as_ref());

    let category_options = move || {
        let fetched = store.categories.get();
        if fetched.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            fetched
        }
    };

    let on_image = Callback::new(move |url: Option<String>| {
        vm.form.update(|f| f.featured_image = url);
    });

    view! {
        <div class="details-container menu-item-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit Menu Item" } else { "Add New Menu Item" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="details-form details-form--two-column">
                <div class="form-group">
                    <label for="item-name">"Name"</label>
                    <input
                        type="text"
                        id="item-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Item name"
                    />
                </div>

                <div class="form-group">
                    <label for="item-price">"Price (₦)"</label>
                    <input
                        type="number"
                        id="item-price"
                        step="0.01"
                        min="0"
                        prop:value=move || vm.form.get().price
                        on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for="item-category">"Category"</label>
                    <select
                        id="item-category"
                        on:change=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="" selected=move || vm.form.get().category.is_empty()>
                            "Select Category"
                        </option>
                        <For
                            each=category_options
                            key=|category| category.clone()
                            children=move |category: String| {
                                let value = category.clone();
                                let selected = {
                                    let category = category.clone();
                                    move || vm.form.get().category == category
                                };
                                view! {
                                    <option value={value} selected=selected>{category.clone()}</option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <label for="item-prep-time">"Preparation Time (minutes)"</label>
                    <input
                        type="number"
                        id="item-prep-time"
                        min="0"
                        prop:value=move || vm.form.get().preparation_time
                        on:input=move |ev| vm.form.update(|f| f.preparation_time = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-spicy">"Spicy Level (1-5)"</label>
                    <input
                        type="number"
                        id="item-spicy"
                        min="1"
                        max="5"
                        prop:value=move || vm.form.get().spicy_level
                        on:input=move |ev| vm.form.update(|f| f.spicy_level = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().is_available
                            on:change=move |ev| vm.form.update(|f| f.is_available = event_target_checked(&ev))
                        />
                        " Available"
                    </label>
                </div>

                <div class="form-group form-group--full">
                    <label for="item-description">"Description"</label>
                    <textarea
                        id="item-description"
                        rows="3"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        placeholder="Describe the dish"
                    />
                </div>

                <div class="form-group">
                    <label for="item-ingredients">"Ingredients (comma-separated)"</label>
                    <input
                        type="text"
                        id="item-ingredients"
                        prop:value=move || vm.form.get().ingredients
                        on:input=move |ev| vm.form.update(|f| f.ingredients = event_target_value(&ev))
                        placeholder="rice, tomatoes, peppers"
                    />
                </div>

                <div class="form-group">
                    <label for="item-allergens">"Allergens (comma-separated)"</label>
                    <input
                        type="text"
                        id="item-allergens"
                        prop:value=move || vm.form.get().allergens
                        on:input=move |ev| vm.form.update(|f| f.allergens = event_target_value(&ev))
                        placeholder="peanuts, shellfish"
                    />
                </div>

                <div class="form-group form-group--full">
                    <label>"Featured Image"</label>
                    <ImageUpload
                        on_upload=on_image
                        current_image=vm.form.get_untracked().featured_image
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {move || {
                        if vm.saving.get() {
                            "Saving..."
                        } else if vm.is_edit_mode() {
                            "Update Item"
                        } else {
                            "Add Item"
                        }
                    }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
