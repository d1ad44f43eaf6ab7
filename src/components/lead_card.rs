//! Lead Card Component
//!
//! Draggable card shown inside a kanban column, with the per-lead
//! actions: edit, follow-up, duplicate, archive and delete.

use leptos::prelude::*;

use crm_core::domain::Lead;
use leptos_kanban_dnd::{make_on_drag_end, make_on_drag_start, DndSignals};

use super::confirm_button::ConfirmButton;
use super::ui::format_currency;

#[component]
pub fn LeadCard(
    lead: Lead,
    dnd: DndSignals,
    #[prop(into)] on_edit: Callback<Lead>,
    #[prop(into)] on_follow_up: Callback<Lead>,
    #[prop(into)] on_duplicate: Callback<Lead>,
    #[prop(into)] on_archive: Callback<Lead>,
    #[prop(into)] on_delete: Callback<Lead>,
) -> impl IntoView {
    let id = lead.id;
    let on_drag_start = make_on_drag_start(dnd, id, lead.column.clone());
    let on_drag_end = make_on_drag_end(dnd);

    let for_edit = lead.clone();
    let for_follow_up = lead.clone();
    let for_duplicate = lead.clone();
    let for_archive = lead.clone();
    let for_delete = lead.clone();

    let card_class = move || {
        if dnd.state_read.get().dragging_id() == Some(id) {
            "lead-card dragging"
        } else {
            "lead-card"
        }
    };

    view! {
        <div
            class=card_class
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
        >
            <div class="lead-card-body" on:click=move |_| on_edit.run(for_edit.clone())>
                <div class="lead-name">{lead.name.clone()}</div>
                <div class="lead-email">{lead.email.clone()}</div>
                <div class="lead-phone">{lead.phone.clone()}</div>
                <div class="lead-meta">
                    <span class="lead-value">{format_currency(lead.estimated_value)}</span>
                    <span class="lead-date">{lead.date.format("%b %d, %Y").to_string()}</span>
                </div>
            </div>
            <div class="lead-card-actions">
                <button
                    class="card-action-btn"
                    title="Set follow-up reminder"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_follow_up.run(for_follow_up.clone());
                    }
                >
                    "Follow up"
                </button>
                <button
                    class="card-action-btn"
                    title="Duplicate lead"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_duplicate.run(for_duplicate.clone());
                    }
                >
                    "Duplicate"
                </button>
                <button
                    class="card-action-btn"
                    title="Archive lead"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_archive.run(for_archive.clone());
                    }
                >
                    "Archive"
                </button>
                <ConfirmButton
                    button_class="card-action-btn delete"
                    label="Delete"
                    prompt="Delete?"
                    on_confirm=Callback::new(move |_| on_delete.run(for_delete.clone()))
                />
            </div>
        </div>
    }
}
