//! Pipeline Pro Frontend App
//!
//! Auth-gated shell: login page when signed out, header plus the active
//! dashboard view when signed in. Store mutations drive the app-wide
//! refresh through the context reload trigger.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppView, FollowUpDashboard, Header, KanbanBoard, LoginPage};
use crate::context::AppContext;
use crate::services;
use crate::store::{store_set_user, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (toast, set_toast) = signal::<Option<(u32, String)>>(None);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (toast, set_toast));
    provide_context(ctx);

    let store = Store::new(AppState::new());
    provide_context(store);

    // Every successful mutation bumps the trigger; views reload from it
    services::leads::subscribe(move || ctx.reload());
    services::reminders::subscribe(move || ctx.reload());

    // Restore an existing session on startup
    store_set_user(&store, services::auth::current_user());

    let (view, set_view) = signal(AppView::Board);
    let signed_in = move || store.current_user().get().is_some();

    view! {
        <div class="app-shell">
            {move || {
                toast
                    .get()
                    .map(|(_, message)| view! { <div class="toast">{message}</div> })
            }}

            <Show when=signed_in fallback=|| view! { <LoginPage /> }>
                <div class="dashboard">
                    <Header view=view set_view=set_view />
                    {move || match view.get() {
                        AppView::Board => view! { <KanbanBoard /> }.into_any(),
                        AppView::FollowUps => view! { <FollowUpDashboard /> }.into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}
