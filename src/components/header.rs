//! Header Component
//!
//! App title, pipeline statistics, view tabs and the session controls.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::{followup, pipeline};

use crate::context::AppContext;
use crate::services;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

use super::ui::format_currency;

/// Which dashboard view is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Board,
    FollowUps,
}

#[component]
pub fn Header(view: ReadSignal<AppView>, set_view: WriteSignal<AppView>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let stats = move || pipeline::stats(&store.leads().get());
    let due_today = move || {
        followup::categorize(&store.reminders().get(), Local::now().naive_local())
            .today
            .len()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            match services::auth::logout().await {
                Ok(()) => {
                    store_set_user(&store, None);
                    ctx.notify("Logged out successfully");
                }
                Err(_) => ctx.notify("Logout failed"),
            }
        });
    };

    view! {
        <header class="app-header">
            <div class="header-title-row">
                <div>
                    <h1>"Pipeline Pro"</h1>
                    <p class="header-subtitle">
                        "Manage your sales leads with visual pipeline tracking"
                    </p>
                </div>
                <div class="header-session">
                    {move || {
                        store
                            .current_user()
                            .get()
                            .map(|user| {
                                view! {
                                    <span class="header-user">
                                        {user.name.clone()} " · " {user.role.clone()}
                                    </span>
                                }
                            })
                    }}
                    <button class="logout-btn" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </div>

            <div class="header-stats">
                <div class="stat-tile">
                    <p class="stat-label">"Pipeline Value"</p>
                    <p class="stat-value">{move || format_currency(stats().pipeline_value)}</p>
                </div>
                <div class="stat-tile">
                    <p class="stat-label">"Closed Value"</p>
                    <p class="stat-value">{move || format_currency(stats().closed_value)}</p>
                </div>
                <div class="stat-tile">
                    <p class="stat-label">"Active Leads"</p>
                    <p class="stat-value">{move || stats().active_leads}</p>
                </div>
                <div class="stat-tile">
                    <p class="stat-label">"Due Today"</p>
                    <p class="stat-value">{move || due_today()}</p>
                </div>
            </div>

            <nav class="view-tabs">
                <button
                    class=move || {
                        if view.get() == AppView::Board { "view-tab active" } else { "view-tab" }
                    }
                    on:click=move |_| set_view.set(AppView::Board)
                >
                    "Board"
                </button>
                <button
                    class=move || {
                        if view.get() == AppView::FollowUps {
                            "view-tab active"
                        } else {
                            "view-tab"
                        }
                    }
                    on:click=move |_| set_view.set(AppView::FollowUps)
                >
                    "Follow-ups"
                </button>
            </nav>
        </header>
    }
}
