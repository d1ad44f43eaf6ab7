//! Login Page Component
//!
//! Mock credential form; a successful login writes the session marker
//! and flips the app gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::services;
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set("Email and password are required".to_string());
            return;
        }

        set_submitting.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match services::auth::login(email, password).await {
                Ok(user) => {
                    store_set_user(&store, Some(user));
                    ctx.notify("Welcome back!");
                }
                Err(err) => {
                    set_error.set(err);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Pipeline Pro"</h1>
                <p class="login-subtitle">"Sign in to manage your sales pipeline"</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_email.set(input.value());
                            }
                        />
                    </label>

                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_password.set(input.value());
                            }
                        />
                    </label>

                    {move || {
                        let message = error.get();
                        (!message.is_empty())
                            .then(|| view! { <p class="login-error">{message}</p> })
                    }}

                    <button type="submit" class="login-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-hint">
                    <p>"Demo accounts:"</p>
                    <p>"admin@pipelinepro.com / admin123"</p>
                    <p>"user@pipelinepro.com / user123"</p>
                </div>
            </div>
        </div>
    }
}
