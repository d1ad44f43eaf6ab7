//! Follow-Up Modal Component
//!
//! Create/edit form for a reminder, tied to a lead when one is known.
//! The future-due-time check lives here; the store does not enforce it.

use chrono::{Local, NaiveDate, NaiveTime};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crm_core::domain::{Lead, Priority, Reminder, ReminderDraft, ReminderKind};

const KINDS: &[(&str, &str)] = &[
    ("call", "Call"),
    ("email", "Email"),
    ("meeting", "Meeting"),
    ("task", "Task"),
];

const PRIORITIES: &[(&str, &str)] = &[
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
];

#[component]
pub fn FollowUpModal(
    /// Lead the reminder belongs to; may be gone for old reminders
    lead: Option<Lead>,
    /// Reminder being edited, `None` when creating
    reminder: Option<Reminder>,
    #[prop(into)] on_save: Callback<ReminderDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = reminder.is_some();

    let lead_id = reminder
        .as_ref()
        .map(|r| r.lead_id)
        .or(lead.as_ref().map(|l| l.id))
        .unwrap_or(0);
    let lead_name = reminder
        .as_ref()
        .map(|r| r.lead_name.clone())
        .or(lead.as_ref().map(|l| l.name.clone()))
        .unwrap_or_default();

    let (kind, set_kind) = signal(
        reminder
            .as_ref()
            .map(|r| r.kind.as_str().to_string())
            .unwrap_or_else(|| "call".to_string()),
    );
    let (title, set_title) = signal(reminder.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let (notes, set_notes) = signal(reminder.as_ref().map(|r| r.notes.clone()).unwrap_or_default());
    let (date, set_date) = signal(
        reminder
            .as_ref()
            .map(|r| r.reminder_date_time.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (time, set_time) = signal(
        reminder
            .as_ref()
            .map(|r| r.reminder_date_time.format("%H:%M").to_string())
            .unwrap_or_else(|| "09:00".to_string()),
    );
    let (priority, set_priority) = signal(
        reminder
            .as_ref()
            .map(|r| r.priority.as_str().to_string())
            .unwrap_or_else(|| "medium".to_string()),
    );

    let (title_error, set_title_error) = signal(String::new());
    let (date_error, set_date_error) = signal(String::new());
    let (time_error, set_time_error) = signal(String::new());

    let modal_lead_name = lead_name.clone();
    let validate = move || -> Option<ReminderDraft> {
        let mut ok = true;

        let title = title.get_untracked();
        if title.trim().is_empty() {
            set_title_error.set("Title is required".to_string());
            ok = false;
        } else {
            set_title_error.set(String::new());
        }

        let raw_time = time.get_untracked();
        let parsed_time = NaiveTime::parse_from_str(&raw_time, "%H:%M").ok();
        if parsed_time.is_none() {
            set_time_error.set("Time is required".to_string());
            ok = false;
        } else {
            set_time_error.set(String::new());
        }

        let raw_date = date.get_untracked();
        let parsed_date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").ok();
        match (parsed_date, parsed_time) {
            (None, _) => {
                set_date_error.set("Date is required".to_string());
                ok = false;
            }
            (Some(d), Some(t)) => {
                let due = d.and_time(t);
                if due < Local::now().naive_local() {
                    set_date_error.set("Reminder must be in the future".to_string());
                    ok = false;
                } else {
                    set_date_error.set(String::new());
                }
            }
            (Some(_), None) => set_date_error.set(String::new()),
        }

        if !ok {
            return None;
        }
        let due = parsed_date?.and_time(parsed_time?);
        Some(ReminderDraft {
            lead_id,
            lead_name: modal_lead_name.clone(),
            kind: ReminderKind::from_str(&kind.get_untracked()),
            title: title.trim().to_string(),
            notes: notes.get_untracked(),
            reminder_date_time: due,
            priority: Priority::from_str(&priority.get_untracked()),
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(draft) = validate() {
            on_save.run(draft);
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{if is_edit { "Edit Follow-up" } else { "Set Follow-up Reminder" }}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                {(!lead_name.is_empty()).then(|| {
                    view! { <p class="modal-subtitle">{format!("For {}", lead_name.clone())}</p> }
                })}

                <form class="modal-form" on:submit=on_submit>
                    <div class="form-field">
                        <span>"Type"</span>
                        <div class="type-selector-row">
                            {KINDS
                                .iter()
                                .map(|(value, label)| {
                                    let val = value.to_string();
                                    let val_clone = val.clone();
                                    let is_selected = move || kind.get() == val;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if is_selected() { "type-btn active" } else { "type-btn" }
                                            }
                                            on:click=move |_| set_kind.set(val_clone.clone())
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <label class="form-field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            placeholder="e.g. Call to discuss the estimate"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        <span class="field-error">{move || title_error.get()}</span>
                    </label>

                    <div class="form-field-row">
                        <label class="form-field">
                            <span>"Date"</span>
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_date.set(input.value());
                                }
                            />
                            <span class="field-error">{move || date_error.get()}</span>
                        </label>

                        <label class="form-field">
                            <span>"Time"</span>
                            <input
                                type="time"
                                prop:value=move || time.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_time.set(input.value());
                                }
                            />
                            <span class="field-error">{move || time_error.get()}</span>
                        </label>
                    </div>

                    <label class="form-field">
                        <span>"Priority"</span>
                        <select
                            prop:value=move || priority.get()
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_priority.set(select.value());
                            }
                        >
                            {PRIORITIES
                                .iter()
                                .map(|(value, label)| {
                                    let val = value.to_string();
                                    view! {
                                        <option value=val.clone() selected=move || priority.get_untracked() == val>
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        <span>"Notes"</span>
                        <textarea
                            prop:value=move || notes.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_notes.set(area.value());
                            }
                        ></textarea>
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="save-btn">
                            {if is_edit { "Save Changes" } else { "Set Reminder" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
