//! UI Primitives
//!
//! Loading, error and empty states shared by the board and the follow-up
//! dashboard, plus small display helpers.

use leptos::prelude::*;

/// Spinner shown while a view loads its data
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Error state with a manual retry; there is no automatic retry anywhere
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <p class="error-message">{message}</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}

/// Empty state placeholder
#[component]
pub fn Empty(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}

/// Whole-dollar currency display with thousands separators
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(8750.0), "$8,750");
        assert_eq!(format_currency(1234567.4), "$1,234,567");
        assert_eq!(format_currency(-4500.0), "-$4,500");
    }

    #[test]
    fn currency_rounds_cents() {
        assert_eq!(format_currency(1999.5), "$2,000");
    }
}
