use contracts::system::auth::{LoginRequest, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::{post_login_route, use_auth};

/// Sign-in / sign-up page. One form, toggled between the two modes;
/// registration flips back to sign-in on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (is_login, set_is_login) = signal(true);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);

    let clear_notices = move || {
        set_error_message.set(None);
        set_success_message.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        clear_notices();

        if is_login.get() {
            let request = LoginRequest {
                email: email.get(),
                password: password.get(),
            };
            let navigate = navigate.clone();
            spawn_local(async move {
                match auth.login(request).await {
                    Ok(user) => {
                        navigate(post_login_route(user.role), Default::default());
                    }
                    Err(e) => set_error_message.set(Some(e)),
                }
            });
        } else {
            if password.get() != confirm_password.get() {
                set_error_message.set(Some("Passwords do not match".to_string()));
                return;
            }
            let request = RegisterRequest {
                name: name.get(),
                email: email.get(),
                phone_number: phone_number.get(),
                password: password.get(),
            };
            spawn_local(async move {
                match auth.register(request).await {
                    Ok(message) => {
                        set_success_message.set(Some(message));
                        set_is_login.set(true);
                        set_password.set(String::new());
                        set_name.set(String::new());
                        set_phone_number.set(String::new());
                        set_confirm_password.set(String::new());
                    }
                    Err(e) => set_error_message.set(Some(e)),
                }
            });
        }
    };

    let switch_mode = move |_| {
        set_is_login.update(|v| *v = !*v);
        clear_notices();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Ember Grill"</h1>
                <h2>{move || if is_login.get() { "Sign in to your account" } else { "Create your account" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success_message.get().is_some()>
                    <div class="success-message">
                        {move || success_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || !is_login.get()>
                        <div class="form-group">
                            <label for="name">"Full name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=move || auth.loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || auth.loading.get()
                        />
                    </div>

                    <Show when=move || !is_login.get()>
                        <div class="form-group">
                            <label for="phone">"Phone number"</label>
                            <input
                                type="tel"
                                id="phone"
                                prop:value=move || phone_number.get()
                                on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                                required
                                disabled=move || auth.loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || auth.loading.get()
                        />
                    </div>

                    <Show when=move || !is_login.get()>
                        <div class="form-group">
                            <label for="confirm-password">"Confirm password"</label>
                            <input
                                type="password"
                                id="confirm-password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                required
                                disabled=move || auth.loading.get()
                            />
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || auth.loading.get()
                    >
                        {move || {
                            if auth.loading.get() {
                                "Please wait..."
                            } else if is_login.get() {
                                "Sign in"
                            } else {
                                "Create account"
                            }
                        }}
                    </button>
                </form>

                <button class="login-box__switch" on:click=switch_mode>
                    {move || {
                        if is_login.get() {
                            "Need an account? Register"
                        } else {
                            "Already have an account? Sign in"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
