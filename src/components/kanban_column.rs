//! Kanban Column Component
//!
//! One pipeline stage: header, drop target handlers and the lead cards
//! currently matched to the stage.

use leptos::prelude::*;

use crm_core::domain::Lead;
use crm_core::pipeline::ColumnGroup;
use leptos_kanban_dnd::{
    make_on_drag_enter, make_on_drag_leave, make_on_drag_over, make_on_drop, DndSignals,
};

use super::column_header::ColumnHeader;
use super::lead_card::LeadCard;
use super::ui::Empty;

#[component]
pub fn KanbanColumn(
    group: ColumnGroup,
    dnd: DndSignals,
    #[prop(into)] on_move: Callback<(u32, String)>,
    #[prop(into)] on_edit: Callback<Lead>,
    #[prop(into)] on_follow_up: Callback<Lead>,
    #[prop(into)] on_duplicate: Callback<Lead>,
    #[prop(into)] on_archive: Callback<Lead>,
    #[prop(into)] on_delete: Callback<Lead>,
) -> impl IntoView {
    let title = group.column.title.clone();

    let on_drag_over = make_on_drag_over(dnd);
    let on_drag_enter = make_on_drag_enter(dnd, title.clone());
    let on_drag_leave = make_on_drag_leave(dnd, title.clone());
    let on_drop = make_on_drop(dnd, title.clone(), move |card_id, target| {
        on_move.run((card_id, target));
    });

    let highlight_title = title.clone();
    let column_class = move || {
        if dnd.state_read.get().is_over(&highlight_title) {
            "kanban-column drag-over"
        } else {
            "kanban-column"
        }
    };

    let is_empty = group.leads.is_empty();

    view! {
        <div
            class=column_class
            on:dragover=on_drag_over
            on:dragenter=on_drag_enter
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <ColumnHeader
                title=group.column.title.clone()
                count=group.count
                color=group.column.color.clone()
                total_value=group.total_value
            />

            <div class="column-cards">
                {group
                    .leads
                    .into_iter()
                    .map(|lead| {
                        view! {
                            <LeadCard
                                lead=lead
                                dnd=dnd
                                on_edit=on_edit
                                on_follow_up=on_follow_up
                                on_duplicate=on_duplicate
                                on_archive=on_archive
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect_view()}

                {is_empty.then(|| view! { <Empty message="No leads in this stage" /> })}
            </div>
        </div>
    }
}
