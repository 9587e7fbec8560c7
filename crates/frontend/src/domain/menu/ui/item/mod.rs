use contracts::domain::menu_item::{MenuItem, MenuItemId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::menu::context::use_menu;
use crate::domain::menu::ui::card::ItemArtwork;
use crate::layout::navbar::Navbar;
use crate::shared::format::{format_naira, format_timestamp};
use crate::shared::icons::icon;

/// Detail page for a single menu item.
///
/// Resolves the item from the cached list first; direct links (fresh page
/// loads) fall back to a one-off fetch by id.
#[component]
pub fn SingleItemPage() -> impl IntoView {
    let store = use_menu();
    let params = use_params_map();

    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let (item, set_item) = signal::<Option<MenuItem>>(None);
    let (not_found, set_not_found) = signal(false);

    Effect::new(move |_| {
        let wanted = id.get();
        if wanted.is_empty() {
            set_not_found.set(true);
            return;
        }

        let cached = store
            .items
            .get()
            .into_iter()
            .find(|i| i.id.as_str() == wanted);

        match cached {
            Some(found) => {
                set_item.set(Some(found));
                set_not_found.set(false);
            }
            None => {
                spawn_local(async move {
                    match store.fetch_item(MenuItemId::new(wanted)).await {
                        Ok(fetched) => {
                            set_item.set(Some(fetched));
                            set_not_found.set(false);
                        }
                        Err(e) => {
                            log::warn!("fetch menu item failed: {}", e);
                            set_not_found.set(true);
                        }
                    }
                });
            }
        }
    });

    view! {
        <div class="page">
            <Navbar />
            {move || match item.get() {
                Some(item) => view! { <ItemDetail item=item /> }.into_any(),
                None => {
                    if not_found.get() {
                        view! { <NotFound /> }.into_any()
                    } else {
                        view! { <div class="spinner" aria-label="Loading"></div> }.into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn ItemDetail(item: MenuItem) -> impl IntoView {
    let image = item.primary_image().map(str::to_string);
    let price = format_naira(item.price);
    let available = item.is_available;
    let category_href = format!("/menu/{}", urlencoding::encode(&item.category));
    let navigate = use_navigate();

    view! {
        <section class="container item-detail">
            <button
                class="button button--secondary"
                on:click=move |_| navigate(&category_href, Default::default())
            >
                {icon("back")}
                {format!("Back to {}", item.category)}
            </button>

            <div class="item-detail__layout">
                <div class="item-detail__media">
                    <ItemArtwork name={item.name.clone()} image={image} />
                </div>

                <div class="item-detail__info">
                    <h1 class="item-detail__title">{item.name.clone()}</h1>
                    <p class="item-detail__price">{price}</p>

                    <div class="item-detail__badges">
                        {if available {
                            view! { <span class="badge badge--success">"Available"</span> }.into_any()
                        } else {
                            view! { <span class="badge badge--danger">"Out of Stock"</span> }.into_any()
                        }}
                        {(item.preparation_time > 0).then(|| view! {
                            <span class="badge badge--info">
                                {icon("clock")}
                                {format!("{} min", item.preparation_time)}
                            </span>
                        })}
                        {(item.spicy_level > 1).then(|| view! {
                            <span class="badge badge--spice">
                                {icon("flame")}
                                {format!("Spice level {}", item.spicy_level)}
                            </span>
                        })}
                    </div>

                    {(!item.description.is_empty()).then(|| view! {
                        <p class="item-detail__description">{item.description.clone()}</p>
                    })}

                    {(!item.ingredients.is_empty()).then(|| view! {
                        <div class="item-detail__list">
                            <h3>"Ingredients"</h3>
                            <ul>
                                {item.ingredients.iter().map(|i| view! { <li>{i.clone()}</li> }).collect_view()}
                            </ul>
                        </div>
                    })}

                    {(!item.allergens.is_empty()).then(|| view! {
                        <div class="item-detail__list item-detail__list--warning">
                            <h3>"Allergens"</h3>
                            <ul>
                                {item.allergens.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                            </ul>
                        </div>
                    })}

                    {item.created_at.map(|dt| view! {
                        <p class="item-detail__meta">{format!("On the menu since {}", format_timestamp(dt))}</p>
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="empty-state empty-state--page">
            <h2>"Item Not Found"</h2>
            <p>"The menu item you're looking for doesn't exist or has been removed."</p>
            <button
                class="button button--primary"
                on:click=move |_| navigate("/menu", Default::default())
            >
                "Back to Menu"
            </button>
        </div>
    }
}
