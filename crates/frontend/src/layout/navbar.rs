use contracts::domain::menu_item::MenuFilter;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::menu::context::use_menu;
use crate::shared::components::SearchInput;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::use_auth;

/// Top navigation bar: brand, menu search, theme toggle and the auth corner.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_menu();
    let auth = use_auth();

    let on_search = Callback::new(move |term: String| {
        let mut patch = MenuFilter::patch();
        patch.search = Some(term);
        store.set_filter(patch);
    });

    let search_value = Signal::derive(move || store.filter.get().search.unwrap_or_default());

    view! {
        <nav class="navbar">
            <A href="/menu" attr:class="navbar__brand">"Ember Grill"</A>

            <ul class="navbar__links">
                <li><A href="/menu">"Home"</A></li>
                <li><a href="#contact">"Get In Touch"</a></li>
            </ul>

            <div class="navbar__tools">
                <SearchInput value=search_value on_change=on_search placeholder="Search dishes..." />
                <ThemeToggle />

                {move || {
                    if auth.is_authenticated() {
                        let user_name = auth.user.get().map(|u| u.name).unwrap_or_default();
                        view! {
                            <div class="navbar__auth">
                                <span class="navbar__user">{user_name}</span>
                                <Show when=move || auth.is_admin()>
                                    <A href="/admin" attr:class="navbar__link">"Dashboard"</A>
                                </Show>
                                // Guarded pages notice the cleared session and
                                // redirect on their own.
                                <button class="navbar__link" on:click=move |_| auth.logout()>
                                    "Logout"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <A href="/login" attr:class="navbar__link">"Sign in"</A>
                        }.into_any()
                    }
                }}
            </div>
        </nav>
    }
}
