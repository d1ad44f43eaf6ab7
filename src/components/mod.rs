//! UI Components
//!
//! Reusable Leptos components.

mod column_header;
mod confirm_button;
mod follow_up_dashboard;
mod follow_up_modal;
mod header;
mod kanban_board;
mod kanban_column;
mod lead_card;
mod lead_modal;
mod login_page;
mod ui;

pub use confirm_button::ConfirmButton;
pub use follow_up_dashboard::FollowUpDashboard;
pub use follow_up_modal::FollowUpModal;
pub use header::{AppView, Header};
pub use kanban_board::KanbanBoard;
pub use kanban_column::KanbanColumn;
pub use lead_card::LeadCard;
pub use lead_modal::LeadModal;
pub use login_page::LoginPage;
pub use ui::{format_currency, Empty, ErrorBanner, Loading};
