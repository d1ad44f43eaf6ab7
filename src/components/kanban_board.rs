//! Kanban Board Component
//!
//! Loads leads and columns, renders a column per configured stage and
//! owns the drag-and-drop wiring plus the lead/follow-up modals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::{Lead, LeadDraft, LeadPatch, ReminderDraft};
use crm_core::pipeline;
use leptos_kanban_dnd::{create_dnd_signals, DndSignals};

use crate::context::AppContext;
use crate::services;
use crate::store::{
    store_add_lead, store_remove_lead, store_update_lead, use_app_store, AppStateStoreFields,
};

use super::follow_up_modal::FollowUpModal;
use super::kanban_column::KanbanColumn;
use super::lead_modal::LeadModal;
use super::ui::{ErrorBanner, Loading};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    let (lead_modal_open, set_lead_modal_open) = signal(false);
    let (editing_lead, set_editing_lead) = signal::<Option<Lead>>(None);
    let (follow_up_lead, set_follow_up_lead) = signal::<Option<Lead>>(None);

    let dnd: DndSignals = create_dnd_signals();

    // Load board data on mount and whenever a mutation bumps the trigger
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            let leads = services::leads::get_all().await;
            let columns = services::columns::get_all().await;
            match (leads, columns) {
                (Ok(leads), Ok(columns)) => {
                    *store.leads().write() = leads;
                    *store.columns().write() = columns;
                }
                (Err(err), _) | (_, Err(err)) => {
                    web_sys::console::error_1(&format!("[BOARD] load failed: {}", err).into());
                    set_error.set("Failed to load data. Please try again.".to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let groups = move || {
        pipeline::board_view(&store.leads().get(), &store.columns().get()).groups
    };

    // Drop handler: exactly one stage change per cross-column drop
    let on_move = Callback::new(move |(card_id, target): (u32, String)| {
        let toast_target = target.clone();
        spawn_local(async move {
            match services::leads::change_stage(card_id, target).await {
                Ok(updated) => {
                    store_update_lead(&store, updated);
                    ctx.notify(format!("Lead moved to {}!", toast_target));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[BOARD] move failed: {}", err).into(),
                    );
                    ctx.notify("Failed to move lead. Please try again.");
                }
            }
        });
    });

    let on_add = move |_| {
        set_editing_lead.set(None);
        set_lead_modal_open.set(true);
    };

    let on_edit = Callback::new(move |lead: Lead| {
        set_editing_lead.set(Some(lead));
        set_lead_modal_open.set(true);
    });

    let on_save_lead = Callback::new(move |draft: LeadDraft| {
        let editing = editing_lead.get_untracked();
        spawn_local(async move {
            let result = match &editing {
                Some(lead) => {
                    services::leads::update(lead.id, LeadPatch::from_draft(&draft)).await
                }
                None => services::leads::create(draft).await,
            };
            match result {
                Ok(saved) => {
                    if editing.is_some() {
                        store_update_lead(&store, saved);
                        ctx.notify("Lead updated successfully!");
                    } else {
                        store_add_lead(&store, saved);
                        ctx.notify("Lead added successfully!");
                    }
                    set_lead_modal_open.set(false);
                    set_editing_lead.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[BOARD] save failed: {}", err).into());
                    ctx.notify("Failed to save lead. Please try again.");
                }
            }
        });
    });

    let on_follow_up = Callback::new(move |lead: Lead| {
        set_follow_up_lead.set(Some(lead));
    });

    let on_save_follow_up = Callback::new(move |draft: ReminderDraft| {
        spawn_local(async move {
            match services::reminders::create(draft).await {
                Ok(reminder) => {
                    ctx.notify(format!(
                        "Follow-up reminder set for {} on {}",
                        reminder.lead_name,
                        reminder.reminder_date_time.format("%b %d, %Y at %I:%M %p"),
                    ));
                    set_follow_up_lead.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[BOARD] reminder save failed: {}", err).into(),
                    );
                    ctx.notify("Failed to set follow-up reminder");
                }
            }
        });
    });

    let on_duplicate = Callback::new(move |lead: Lead| {
        spawn_local(async move {
            match services::leads::duplicate(lead.id).await {
                Ok(_) => ctx.notify(format!("{} has been duplicated", lead.name)),
                Err(_) => ctx.notify("Failed to duplicate lead"),
            }
        });
    });

    let on_archive = Callback::new(move |lead: Lead| {
        spawn_local(async move {
            match services::leads::archive(lead.id).await {
                Ok(archived) => {
                    store_update_lead(&store, archived);
                    ctx.notify(format!("{} has been archived", lead.name));
                }
                Err(_) => ctx.notify("Failed to archive lead"),
            }
        });
    });

    let on_delete = Callback::new(move |lead: Lead| {
        spawn_local(async move {
            match services::leads::delete(lead.id).await {
                Ok(()) => {
                    store_remove_lead(&store, lead.id);
                    ctx.notify(format!("{} has been deleted", lead.name));
                }
                Err(_) => ctx.notify("Failed to delete lead"),
            }
        });
    });

    view! {
        <div class="kanban-board-page">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || error.get().is_empty()
                    fallback=move || {
                        view! {
                            <ErrorBanner
                                message=error.get()
                                on_retry=Callback::new(move |_| ctx.reload())
                            />
                        }
                    }
                >
                    <div class="board-toolbar">
                        <button class="add-lead-btn" on:click=on_add>
                            "+ Add Lead"
                        </button>
                    </div>

                    <div class="kanban-board">
                        {move || {
                            groups()
                                .into_iter()
                                .map(|group| {
                                    view! {
                                        <KanbanColumn
                                            group=group
                                            dnd=dnd
                                            on_move=on_move
                                            on_edit=on_edit
                                            on_follow_up=on_follow_up
                                            on_duplicate=on_duplicate
                                            on_archive=on_archive
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>

            {move || {
                lead_modal_open.get().then(|| {
                    view! {
                        <LeadModal
                            lead=editing_lead.get_untracked()
                            columns=store.columns().get_untracked()
                            on_save=on_save_lead
                            on_close=Callback::new(move |_| {
                                set_lead_modal_open.set(false);
                                set_editing_lead.set(None);
                            })
                        />
                    }
                })
            }}

            {move || {
                follow_up_lead.get().map(|lead| {
                    view! {
                        <FollowUpModal
                            lead=Some(lead)
                            reminder=None
                            on_save=on_save_follow_up
                            on_close=Callback::new(move |_| set_follow_up_lead.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}
