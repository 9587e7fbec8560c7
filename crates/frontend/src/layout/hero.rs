use leptos::prelude::*;

/// Banner at the top of the menu landing page.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero__content">
                <h1 class="hero__title">"Ember Grill"</h1>
                <p class="hero__tagline">
                    "Charcoal-fired Nigerian kitchen. Browse the menu, pick a dish, we handle the fire."
                </p>
                <a href="#menu" class="button button--primary">"Explore the menu"</a>
            </div>
        </div>
    }
}
