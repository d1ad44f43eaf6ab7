//! Column Header Component
//!
//! Stage title with lead count badge, total value and color accent bar.

use leptos::prelude::*;

use super::ui::format_currency;

#[component]
pub fn ColumnHeader(
    #[prop(into)] title: String,
    count: usize,
    #[prop(into)] color: String,
    total_value: f64,
) -> impl IntoView {
    view! {
        <div class="column-header">
            <div class="column-header-row">
                <h2 class="column-title">{title}</h2>
                <span class="column-count-badge">{count}</span>
            </div>
            <div class="column-total">{format_currency(total_value)}</div>
            <div
                class="column-accent"
                style=format!("background-color: {};", color)
            ></div>
        </div>
    }
}
