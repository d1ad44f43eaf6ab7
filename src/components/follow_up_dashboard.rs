//! Follow-Up Dashboard Component
//!
//! Loads reminders (and leads, for editing context), buckets them by due
//! time and renders the sections in fixed order with complete / edit /
//! delete actions.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::{Reminder, ReminderDraft, ReminderPatch};
use crm_core::followup::{self, Categorized};

use crate::context::AppContext;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

use super::confirm_button::ConfirmButton;
use super::follow_up_modal::FollowUpModal;
use super::ui::{Empty, ErrorBanner, Loading};

#[component]
pub fn FollowUpDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (editing_reminder, set_editing_reminder) = signal::<Option<Reminder>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            let reminders = services::reminders::get_all().await;
            let leads = services::leads::get_all().await;
            match (reminders, leads) {
                (Ok(reminders), Ok(leads)) => {
                    *store.reminders().write() = reminders;
                    *store.leads().write() = leads;
                }
                (Err(err), _) | (_, Err(err)) => {
                    web_sys::console::error_1(
                        &format!("[FOLLOWUPS] load failed: {}", err).into(),
                    );
                    set_error.set("Failed to load follow-up data".to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let categorized = move || -> Categorized {
        followup::categorize(&store.reminders().get(), Local::now().naive_local())
    };

    let on_complete = Callback::new(move |reminder: Reminder| {
        spawn_local(async move {
            match services::reminders::mark_completed(reminder.id).await {
                Ok(_) => ctx.notify("Follow-up marked as completed"),
                Err(_) => ctx.notify("Failed to complete follow-up"),
            }
        });
    });

    let on_delete = Callback::new(move |reminder: Reminder| {
        spawn_local(async move {
            match services::reminders::delete(reminder.id).await {
                Ok(_) => ctx.notify("Follow-up reminder deleted"),
                Err(_) => ctx.notify("Failed to delete follow-up reminder"),
            }
        });
    });

    let on_edit = Callback::new(move |reminder: Reminder| {
        set_editing_reminder.set(Some(reminder));
    });

    let on_save = Callback::new(move |draft: ReminderDraft| {
        let editing = editing_reminder.get_untracked();
        spawn_local(async move {
            let result = match &editing {
                Some(reminder) => {
                    services::reminders::update(reminder.id, ReminderPatch::from_draft(&draft))
                        .await
                        .map(|_| ())
                }
                None => services::reminders::create(draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    ctx.notify(if editing.is_some() {
                        "Follow-up reminder updated"
                    } else {
                        "Follow-up reminder set"
                    });
                    set_editing_reminder.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[FOLLOWUPS] save failed: {}", err).into(),
                    );
                    ctx.notify("Failed to save follow-up reminder");
                }
            }
        });
    });

    view! {
        <div class="followup-page">
            <h1>"Follow-ups"</h1>

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
                    <Show
                        when=move || !store.reminders().get().is_empty()
                        fallback=|| view! { <Empty message="No follow-up reminders yet" /> }
                    >
                        {move || {
                            let grouped = categorized();
                            grouped
                                .sections()
                                .iter()
                                .map(|(bucket, reminders)| {
                                    view! {
                                        <ReminderSection
                                            label=bucket.label()
                                            reminders=(*reminders).clone()
                                            on_complete=on_complete
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </Show>
            </Show>

            {move || {
                editing_reminder.get().map(|reminder| {
                    let lead = store
                        .leads()
                        .get_untracked()
                        .into_iter()
                        .find(|l| l.id == reminder.lead_id);
                    view! {
                        <FollowUpModal
                            lead=lead
                            reminder=Some(reminder)
                            on_save=on_save
                            on_close=Callback::new(move |_| set_editing_reminder.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

/// One bucket of reminders with its heading; empty buckets render nothing
#[component]
fn ReminderSection(
    label: &'static str,
    reminders: Vec<Reminder>,
    on_complete: Callback<Reminder>,
    on_edit: Callback<Reminder>,
    on_delete: Callback<Reminder>,
) -> impl IntoView {
    if reminders.is_empty() {
        return ().into_any();
    }
    let count = reminders.len();

    view! {
        <section class="reminder-section">
            <div class="reminder-section-header">
                <h2>{label}</h2>
                <span class="reminder-count-badge">{count}</span>
            </div>
            <div class="reminder-list">
                {reminders
                    .into_iter()
                    .map(|reminder| {
                        view! {
                            <ReminderRow
                                reminder=reminder
                                on_complete=on_complete
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ReminderRow(
    reminder: Reminder,
    on_complete: Callback<Reminder>,
    on_edit: Callback<Reminder>,
    on_delete: Callback<Reminder>,
) -> impl IntoView {
    let for_complete = reminder.clone();
    let for_edit = reminder.clone();
    let for_delete = reminder.clone();
    let completed = reminder.completed;

    view! {
        <div class=if completed { "reminder-row completed" } else { "reminder-row" }>
            <div class="reminder-main">
                <span class=format!("reminder-kind {}", reminder.kind.as_str())>
                    {kind_label(reminder.kind.as_str())}
                </span>
                <div class="reminder-text">
                    <div class="reminder-title">{reminder.title.clone()}</div>
                    <div class="reminder-lead">{reminder.lead_name.clone()}</div>
                    {(!reminder.notes.is_empty())
                        .then(|| view! { <div class="reminder-notes">{reminder.notes.clone()}</div> })}
                </div>
            </div>
            <div class="reminder-side">
                <span class="reminder-due">
                    {reminder.reminder_date_time.format("%b %d, %Y %I:%M %p").to_string()}
                </span>
                <span class=format!("priority-badge {}", reminder.priority.as_str())>
                    {reminder.priority.as_str()}
                </span>
            </div>
            <div class="reminder-actions">
                {(!completed).then(|| {
                    view! {
                        <button
                            class="complete-btn"
                            on:click=move |_| on_complete.run(for_complete.clone())
                        >
                            "Complete"
                        </button>
                    }
                })}
                <button class="edit-btn" on:click=move |_| on_edit.run(for_edit.clone())>
                    "Edit"
                </button>
                <ConfirmButton
                    button_class="delete-btn"
                    label="Delete"
                    prompt="Delete?"
                    on_confirm=Callback::new(move |_| on_delete.run(for_delete.clone()))
                />
            </div>
        </div>
    }
}

fn kind_label(kind: &str) -> &'static str {
    match kind {
        "email" => "Email",
        "meeting" => "Meeting",
        "task" => "Task",
        _ => "Call",
    }
}
