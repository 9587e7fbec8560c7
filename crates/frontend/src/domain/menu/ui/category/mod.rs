use contracts::domain::menu_item::{MenuFilter, MenuItem};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::menu::context::use_menu;
use crate::domain::menu::ui::card::MenuItemCard;
use crate::layout::navbar::Navbar;
use crate::shared::icons::icon;

/// Items of one category, with an in-category search.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let store = use_menu();
    let params = use_params_map();
    let navigate = use_navigate();

    let category = Memo::new(move |_| {
        let raw = params.read().get("category").unwrap_or_default();
        urlencoding::decode(&raw)
            .map(|s| s.into_owned())
            .unwrap_or(raw)
    });

    let (search_term, set_search_term) = signal(String::new());

    // Constrain the shared filter to this category whenever the URL changes.
    Effect::new(move |_| {
        let mut patch = MenuFilter::patch();
        patch.category = Some(category.get());
        patch.search = Some(String::new());
        store.set_filter(patch);
    });

    let run_search = move || {
        let mut patch = MenuFilter::patch();
        patch.category = Some(category.get_untracked());
        patch.search = Some(search_term.get_untracked());
        store.set_filter(patch);
    };

    // The server already filters; this guards against stale cached items
    // from a previous page while the re-fetch is in flight.
    let category_items = move || {
        let wanted = category.get().to_lowercase();
        store
            .items
            .get()
            .into_iter()
            .filter(|item: &MenuItem| item.category.to_lowercase() == wanted)
            .collect::<Vec<_>>()
    };

    let clear_search = move |_| {
        set_search_term.set(String::new());
        run_search();
    };

    view! {
        <div class="page">
            <Navbar />
            <section class="container">
                <div class="section">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate("/menu", Default::default())
                    >
                        {icon("back")}
                        "Back to Menu"
                    </button>

                    <h1 class="section__title section__title--large">{move || category.get()}</h1>
                    <p class="section__subtitle">
                        {move || {
                            let count = category_items().len();
                            format!("{} {} available", count, if count == 1 { "item" } else { "items" })
                        }}
                    </p>
                </div>

                {move || store.error.get().map(|e| view! {
                    <div class="error-banner">
                        <span>"Failed to load category items: " {e}</span>
                        <button
                            class="button button--secondary"
                            disabled=move || store.loading.get()
                            on:click=move |_| store.fetch_items()
                        >
                            {icon("refresh")}
                            {move || if store.loading.get() { "Refreshing..." } else { "Retry" }}
                        </button>
                    </div>
                })}

                <div class="filters">
                    <input
                        type="text"
                        class="filters__search"
                        placeholder=move || format!("Search in {}...", category.get())
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        on:keypress=move |ev| {
                            if ev.key() == "Enter" {
                                run_search();
                            }
                        }
                    />
                    <button class="button button--primary" on:click=move |_| run_search()>
                        {icon("search")}
                        "Search"
                    </button>
                </div>

                <Show
                    when=move || !store.loading.get()
                    fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                >
                    {move || {
                        let items = category_items();
                        if items.is_empty() {
                            let term = search_term.get();
                            view! {
                                <div class="empty-state">
                                    <h3>"No items found"</h3>
                                    <p>
                                        {if term.is_empty() {
                                            format!("No items available in the {} category", category.get())
                                        } else {
                                            format!("No items match \"{}\" in {}", term, category.get())
                                        }}
                                    </p>
                                    <Show when=move || !search_term.get().is_empty()>
                                        <button class="button button--primary" on:click=clear_search>
                                            "Clear Search"
                                        </button>
                                    </Show>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="menu-grid">
                                    {items.into_iter().map(|item| view! {
                                        <MenuItemCard item=item />
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}
