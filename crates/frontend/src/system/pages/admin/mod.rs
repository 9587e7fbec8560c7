//! Admin dashboard: menu item management and admin provisioning.

pub mod details;

use contracts::domain::menu_item::MenuItem;
use contracts::system::auth::CreateAdminRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::menu::context::use_menu;
use crate::domain::menu::ui::card::ItemArtwork;
use crate::layout::navbar::Navbar;
use crate::shared::format::format_naira;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use details::MenuItemDetails;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Menu,
    Admins,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_menu();
    let navigate = use_navigate();

    let (active_tab, set_active_tab) = signal(Tab::Menu);
    let (show_form, set_show_form) = signal(false);
    let (editing_item, set_editing_item) = signal::<Option<MenuItem>>(None);

    let handle_logout = move |_| {
        auth.logout();
        navigate("/login", Default::default());
    };

    let open_create = move |_| {
        set_editing_item.set(None);
        set_show_form.set(true);
    };

    let open_edit = move |item: MenuItem| {
        set_editing_item.set(Some(item));
        set_show_form.set(true);
    };

    let close_form = Callback::new(move |_: ()| {
        set_show_form.set(false);
        set_editing_item.set(None);
    });

    let handle_delete = move |item: MenuItem| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this item?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            // Failures are logged by the store; the list simply stays put.
            let _ = store.delete_item(item.id.clone()).await;
        });
    };

    view! {
        <div class="page">
            <Navbar />
            <section class="container">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">"Admin Dashboard"</h1>
                    </div>
                    <div class="header__actions">
                        <button class="button button--danger" on:click=handle_logout>
                            {icon("logout")}
                            "Logout"
                        </button>
                    </div>
                </div>

                <div class="tabs">
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || active_tab.get() == Tab::Menu
                        on:click=move |_| set_active_tab.set(Tab::Menu)
                    >
                        "Menu Management"
                    </button>
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || active_tab.get() == Tab::Admins
                        on:click=move |_| set_active_tab.set(Tab::Admins)
                    >
                        "Admin Management"
                    </button>
                </div>

                <Show when=move || active_tab.get() == Tab::Menu>
                    <div class="header">
                        <div class="header__content">
                            <h2 class="header__subtitle">"Menu Items"</h2>
                        </div>
                        <div class="header__actions">
                            <button class="button button--primary" on:click=open_create>
                                {icon("plus")}
                                "Add New Item"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| store.fetch_items()
                            >
                                {icon("refresh")}
                                "Refresh"
                            </button>
                        </div>
                    </div>

                    {move || show_form.get().then(|| view! {
                        <MenuItemDetails
                            item=editing_item.get()
                            on_saved=close_form
                            on_cancel=close_form
                        />
                    })}

                    {move || store.error.get().map(|e| view! {
                        <div class="error-banner"><span>{e}</span></div>
                    })}

                    <Show when=move || store.loading.get()>
                        <div class="spinner" aria-label="Loading"></div>
                    </Show>

                    <div class="menu-grid">
                        <For
                            each=move || store.items.get()
                            key=|item| item.id.clone()
                            children=move |item: MenuItem| {
                                let edit_item = item.clone();
                                let delete_item = item.clone();
                                let image = item.primary_image().map(str::to_string);
                                view! {
                                    <div class="admin-card">
                                        <div class="admin-card__media">
                                            <ItemArtwork name={item.name.clone()} image={image} />
                                        </div>
                                        <div class="admin-card__body">
                                            <h3>{item.name.clone()}</h3>
                                            <p class="admin-card__description">{item.description.clone()}</p>
                                            <p class="admin-card__price">{format_naira(item.price)}</p>
                                            <p class="admin-card__meta">"Category: " {item.category.clone()}</p>
                                            <p class="admin-card__meta">
                                                "Status: "
                                                {if item.is_available { "Available" } else { "Unavailable" }}
                                            </p>
                                            <div class="admin-card__actions">
                                                <button
                                                    class="button button--secondary button--small"
                                                    on:click=move |_| open_edit(edit_item.clone())
                                                >
                                                    {icon("edit")}
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    on:click=move |_| handle_delete(delete_item.clone())
                                                >
                                                    {icon("delete")}
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>

                <Show when=move || active_tab.get() == Tab::Admins>
                    <CreateAdminPanel />
                </Show>
            </section>
        </div>
    }
}

#[component]
fn CreateAdminPanel() -> impl IntoView {
    let auth = use_auth();

    let (show_form, set_show_form) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);

    let reset_form = move || {
        set_name.set(String::new());
        set_email.set(String::new());
        set_phone_number.set(String::new());
        set_password.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_success_message.set(None);

        let request = CreateAdminRequest {
            name: name.get(),
            email: email.get(),
            phone_number: phone_number.get(),
            password: password.get(),
        };
        spawn_local(async move {
            match auth.create_admin(request).await {
                Ok(()) => {
                    reset_form();
                    set_show_form.set(false);
                    set_success_message.set(Some("Admin created successfully!".to_string()));
                    gloo_timers::future::TimeoutFuture::new(4000).await;
                    set_success_message.set(None);
                }
                Err(e) => set_error_message.set(Some(e)),
            }
        });
    };

    view! {
        <div>
            <div class="header">
                <div class="header__content">
                    <h2 class="header__subtitle">"Admin Management"</h2>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_form.set(true)>
                        {icon("plus")}
                        "Create New Admin"
                    </button>
                </div>
            </div>

            {move || success_message.get().map(|m| view! {
                <div class="success-message">{m}</div>
            })}

            <Show when=move || show_form.get()>
                <div class="details-container">
                    <div class="details-header">
                        <h3>"Create New Admin"</h3>
                    </div>

                    {move || error_message.get().map(|e| view! {
                        <div class="error-message">{e}</div>
                    })}

                    <form class="details-form details-form--two-column" on:submit=on_submit>
                        <div class="form-group">
                            <label for="admin-name">"Name"</label>
                            <input
                                type="text"
                                id="admin-name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label for="admin-email">"Email"</label>
                            <input
                                type="email"
                                id="admin-email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label for="admin-phone">"Phone Number"</label>
                            <input
                                type="tel"
                                id="admin-phone"
                                prop:value=move || phone_number.get()
                                on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-group">
                            <label for="admin-password">"Password"</label>
                            <input
                                type="password"
                                id="admin-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="details-actions form-group--full">
                            <button type="submit" class="button button--primary">
                                "Create Admin"
                            </button>
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| set_show_form.set(false)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
