use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::menu::ui::category::CategoryPage;
use crate::domain::menu::ui::item::SingleItemPage;
use crate::domain::menu::ui::list::MenuPage;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=MenuPage />
                    <Route path=path!("/menu") view=MenuPage />
                    // item route first, so "item" is never read as a category
                    <Route path=path!("/menu/item/:id") view=SingleItemPage />
                    <Route path=path!("/menu/:category") view=CategoryPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/admin")
                        view=|| view! { <RequireAdmin><AdminPage /></RequireAdmin> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="empty-state empty-state--page">
            <h2>"Page not found"</h2>
            <a href="/menu" class="button button--primary">"Back to Menu"</a>
        </div>
    }
}
