//! Lead Modal Component
//!
//! Create/edit form for a lead. All validation lives here; the store
//! accepts whatever the form hands it.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crm_core::domain::{Column, Lead, LeadDraft};

#[component]
pub fn LeadModal(
    /// Lead being edited, `None` when creating
    lead: Option<Lead>,
    columns: Vec<Column>,
    #[prop(into)] on_save: Callback<LeadDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = lead.is_some();
    let default_stage = columns
        .first()
        .map(|c| c.title.clone())
        .unwrap_or_default();

    let (name, set_name) = signal(lead.as_ref().map(|l| l.name.clone()).unwrap_or_default());
    let (email, set_email) = signal(lead.as_ref().map(|l| l.email.clone()).unwrap_or_default());
    let (phone, set_phone) = signal(lead.as_ref().map(|l| l.phone.clone()).unwrap_or_default());
    let (value, set_value) = signal(
        lead.as_ref()
            .map(|l| l.estimated_value.to_string())
            .unwrap_or_default(),
    );
    let (date, set_date) = signal(
        lead.as_ref()
            .map(|l| l.date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string()),
    );
    let (column, set_column) = signal(
        lead.as_ref()
            .map(|l| l.column.clone())
            .unwrap_or(default_stage),
    );

    let (name_error, set_name_error) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (phone_error, set_phone_error) = signal(String::new());
    let (value_error, set_value_error) = signal(String::new());
    let (date_error, set_date_error) = signal(String::new());

    let validate = move || -> Option<LeadDraft> {
        let mut ok = true;

        let name = name.get_untracked();
        if name.trim().is_empty() {
            set_name_error.set("Name is required".to_string());
            ok = false;
        } else {
            set_name_error.set(String::new());
        }

        let email = email.get_untracked();
        if email.trim().is_empty() {
            set_email_error.set("Email is required".to_string());
            ok = false;
        } else if !looks_like_email(&email) {
            set_email_error.set("Email is invalid".to_string());
            ok = false;
        } else {
            set_email_error.set(String::new());
        }

        let phone = phone.get_untracked();
        if phone.trim().is_empty() {
            set_phone_error.set("Phone is required".to_string());
            ok = false;
        } else {
            set_phone_error.set(String::new());
        }

        let raw_value = value.get_untracked();
        let parsed_value = raw_value.trim().parse::<f64>().ok().filter(|v| *v > 0.0);
        if raw_value.trim().is_empty() {
            set_value_error.set("Estimated value is required".to_string());
            ok = false;
        } else if parsed_value.is_none() {
            set_value_error.set("Must be a positive number".to_string());
            ok = false;
        } else {
            set_value_error.set(String::new());
        }

        let raw_date = date.get_untracked();
        let parsed_date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").ok();
        if parsed_date.is_none() {
            set_date_error.set("Date is required".to_string());
            ok = false;
        } else {
            set_date_error.set(String::new());
        }

        if !ok {
            return None;
        }
        Some(LeadDraft {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            estimated_value: parsed_value?,
            date: parsed_date?,
            column: column.get_untracked(),
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
                    <h2>{if is_edit { "Edit Lead" } else { "Add New Lead" }}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                <form class="modal-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                        <span class="field-error">{move || name_error.get()}</span>
                    </label>

                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="text"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_email.set(input.value());
                            }
                        />
                        <span class="field-error">{move || email_error.get()}</span>
                    </label>

                    <label class="form-field">
                        <span>"Phone"</span>
                        <input
                            type="text"
                            prop:value=move || phone.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_phone.set(input.value());
                            }
                        />
                        <span class="field-error">{move || phone_error.get()}</span>
                    </label>

                    <label class="form-field">
                        <span>"Estimated Value"</span>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || value.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_value.set(input.value());
                            }
                        />
                        <span class="field-error">{move || value_error.get()}</span>
                    </label>

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
                        <span>"Stage"</span>
                        <select
                            prop:value=move || column.get()
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_column.set(select.value());
                            }
                        >
                            {columns
                                .iter()
                                .map(|c| {
                                    let title = c.title.clone();
                                    view! {
                                        <option value=title.clone() selected=move || column.get_untracked() == title>
                                            {c.title.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="save-btn">
                            {if is_edit { "Save Changes" } else { "Add Lead" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Loose check: something@domain-with-a-dot, no whitespace
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
