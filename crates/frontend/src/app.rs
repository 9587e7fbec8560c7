use crate::domain::menu::context::MenuProvider;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <AuthProvider>
                <MenuProvider>
                    <AppRoutes />
                </MenuProvider>
            </AuthProvider>
        </ThemeProvider>
    }
}
