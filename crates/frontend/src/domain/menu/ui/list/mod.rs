use contracts::domain::menu_item::MenuFilter;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::menu::context::use_menu;
use crate::domain::menu::ui::card::{placeholder_style, MenuItemCard};
use crate::layout::hero::Hero;
use crate::layout::navbar::Navbar;
use crate::shared::components::SearchInput;
use crate::shared::format::format_naira;
use crate::shared::icons::icon;

/// Menu landing page: hero, category grid, filterable item grid.
#[component]
pub fn MenuPage() -> impl IntoView {
    let store = use_menu();

    let on_search = Callback::new(move |term: String| {
        let mut patch = MenuFilter::patch();
        patch.search = Some(term);
        store.set_filter(patch);
    });

    let on_category_change = move |ev: leptos::ev::Event| {
        let mut patch = MenuFilter::patch();
        patch.category = Some(event_target_value(&ev));
        store.set_filter(patch);
    };

    let search_value = Signal::derive(move || {
        store.filter.get().search.unwrap_or_default()
    });

    let active_filters = move || store.filter.get().active_count();

    view! {
        <div class="page">
            <Navbar />
            <section class="container">
                <Hero />

                <div class="section">
                    <h3 class="section__title">"Menu"</h3>
                    <div class="category-grid">
                        <For
                            each=move || store.categories.get()
                            key=|category| category.clone()
                            children=move |category: String| {
                                view! { <CategoryCard category=category /> }
                            }
                        />
                    </div>
                </div>

                <div class="section">
                    <h3 class="section__title">"Food"</h3>

                    <div class="filters">
                        <SearchInput
                            value=search_value
                            on_change=on_search
                            placeholder="Search the menu..."
                        />
                        <select class="filters__category" on:change=on_category_change>
                            <option value="">"All categories"</option>
                            <For
                                each=move || store.categories.get()
                                key=|category| category.clone()
                                children=move |category: String| {
                                    let selected = {
                                        let category = category.clone();
                                        move || store.filter.get().category.as_deref() == Some(category.as_str())
                                    };
                                    view! {
                                        <option value={category.clone()} selected=selected>
                                            {category.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <Show when=move || { active_filters() > 0 }>
                            <button
                                class="button button--secondary"
                                on:click=move |_| store.clear_filter()
                            >
                                {icon("x")}
                                {move || format!("Clear filters ({})", active_filters())}
                            </button>
                        </Show>
                        <Show when=move || { store.price_range.get().max > 0.0 }>
                            <span class="filters__hint">
                                {move || {
                                    let range = store.price_range.get();
                                    format!("Prices {} - {}", format_naira(range.min), format_naira(range.max))
                                }}
                            </span>
                        </Show>
                    </div>

                    {move || store.error.get().map(|e| view! {
                        <div class="error-banner">
                            <span>{e}</span>
                            <button
                                class="button button--secondary"
                                disabled=move || store.loading.get()
                                on:click=move |_| store.fetch_items()
                            >
                                {icon("refresh")}
                                "Retry"
                            </button>
                        </div>
                    })}

                    <Show
                        when=move || !store.loading.get()
                        fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                    >
                        <Show
                            when=move || !store.items.get().is_empty()
                            fallback=|| view! {
                                <div class="empty-state">
                                    <h3>"No items found"</h3>
                                    <p>"Try a different search or category."</p>
                                </div>
                            }
                        >
                            <div class="menu-grid">
                                <For
                                    each=move || store.items.get()
                                    key=|item| item.id.clone()
                                    children=move |item| view! { <MenuItemCard item=item /> }
                                />
                            </div>
                        </Show>
                    </Show>
                </div>
            </section>
        </div>
    }
}

/// Tile in the category grid; links to the category listing page.
#[component]
fn CategoryCard(category: String) -> impl IntoView {
    let href = format!("/menu/{}", urlencoding::encode(&category));
    let style = placeholder_style(&category);
    let label = category.clone();

    view! {
        <A href={href} attr:class="category-card" attr:style={style}>
            <h2 class="category-card__title">{label}</h2>
        </A>
    }
}
