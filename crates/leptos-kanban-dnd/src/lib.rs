//! Leptos Kanban DnD Utilities
//!
//! Drag-and-drop for kanban boards using native HTML5 drag events.
//! The transition logic lives in a plain state machine so it can be
//! tested without a browser; the `make_on_*` factories wire it to
//! Leptos signals and web-sys events.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A card move requested by a completed drop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropRequest {
    pub card_id: u32,
    pub target_column: String,
}

/// Drag coordinator state
///
/// One instance per board view. The coordinator never mutates card data
/// itself; a completed drop surfaces a `DropRequest` and the state is
/// already back to `Idle` when the caller acts on it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A card is being moved
    Dragging { card_id: u32, source_column: String },
    /// A card is being moved and hovers a column's drop target
    OverColumn {
        card_id: u32,
        source_column: String,
        column: String,
    },
}

impl DragState {
    /// Begin dragging a card
    pub fn start(&mut self, card_id: u32, source_column: &str) {
        *self = DragState::Dragging {
            card_id,
            source_column: source_column.to_string(),
        };
    }

    /// Pointer entered a column's drop target
    pub fn enter_column(&mut self, column: &str) {
        let (card_id, source_column) = match self {
            DragState::Idle => return,
            DragState::Dragging {
                card_id,
                source_column,
            }
            | DragState::OverColumn {
                card_id,
                source_column,
                ..
            } => (*card_id, source_column.clone()),
        };
        *self = DragState::OverColumn {
            card_id,
            source_column,
            column: column.to_string(),
        };
    }

    /// Pointer left a column's bounding region
    ///
    /// Only clears the hover when it names the column currently hovered;
    /// stale leaves from a previously hovered column are ignored.
    pub fn leave_column(&mut self, column: &str) {
        if let DragState::OverColumn {
            card_id,
            source_column,
            column: hovered,
        } = self
        {
            if hovered == column {
                *self = DragState::Dragging {
                    card_id: *card_id,
                    source_column: source_column.clone(),
                };
            }
        }
    }

    /// Complete the drag on `column`, resetting to `Idle`
    ///
    /// Returns a request only when a card was being dragged and the drop
    /// target differs from its source column; dropping a card back where
    /// it came from is a no-op.
    pub fn drop_on(&mut self, column: &str) -> Option<DropRequest> {
        let state = std::mem::take(self);
        match state {
            DragState::Idle => None,
            DragState::Dragging {
                card_id,
                source_column,
            }
            | DragState::OverColumn {
                card_id,
                source_column,
                ..
            } => {
                if source_column == column {
                    None
                } else {
                    Some(DropRequest {
                        card_id,
                        target_column: column.to_string(),
                    })
                }
            }
        }
    }

    /// Abandon the drag (drag end without a handled drop)
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Id of the card being dragged, if any
    pub fn dragging_id(&self) -> Option<u32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { card_id, .. } | DragState::OverColumn { card_id, .. } => {
                Some(*card_id)
            }
        }
    }

    /// Whether `column` is the currently hovered drop target
    pub fn is_over(&self, column: &str) -> bool {
        matches!(self, DragState::OverColumn { column: hovered, .. } if hovered == column)
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (state_read, state_write) = signal(DragState::Idle);
    DndSignals {
        state_read,
        state_write,
    }
}

/// Create dragstart handler for a draggable card
pub fn make_on_drag_start(
    dnd: DndSignals,
    card_id: u32,
    source_column: String,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data("text/plain", &card_id.to_string());
        }
        let column = source_column.clone();
        dnd.state_write.update(|s| s.start(card_id, &column));
    }
}

/// Create dragend handler for a draggable card
pub fn make_on_drag_end(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |_ev: web_sys::DragEvent| {
        dnd.state_write.update(|s| s.cancel());
    }
}

/// Create dragover handler for a column drop target
///
/// Preventing the default is what marks the column as a valid target.
pub fn make_on_drag_over(_dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
    }
}

/// Create dragenter handler for a column drop target
pub fn make_on_drag_enter(
    dnd: DndSignals,
    column: String,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let column = column.clone();
        dnd.state_write.update(|s| s.enter_column(&column));
    }
}

/// Create dragleave handler for a column drop target
///
/// Leaves fire when the pointer crosses into child elements of the same
/// column; those are ignored by checking whether the leave's related
/// target is still a descendant of the column element.
pub fn make_on_drag_leave(
    dnd: DndSignals,
    column: String,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        let still_inside = match (ev.current_target(), ev.related_target()) {
            (Some(current), Some(related)) => current
                .dyn_ref::<web_sys::Element>()
                .zip(related.dyn_ref::<web_sys::Node>())
                .is_some_and(|(el, node)| el.contains(Some(node))),
            _ => false,
        };
        if !still_inside {
            let column = column.clone();
            dnd.state_write.update(|s| s.leave_column(&column));
        }
    }
}

/// Create drop handler for a column drop target
///
/// `on_move` runs once per cross-column drop with `(card_id, target)`;
/// same-column drops never reach it.
pub fn make_on_drop<F>(
    dnd: DndSignals,
    column: String,
    on_move: F,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, String) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let mut request = None;
        let column = column.clone();
        dnd.state_write.update(|s| request = s.drop_on(&column));
        if let Some(request) = request {
            on_move(request.card_id, request.target_column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_over_column_then_drop_requests_one_move() {
        let mut state = DragState::default();
        state.start(7, "Cold Lead");
        state.enter_column("Hot Lead");
        assert!(state.is_over("Hot Lead"));
        assert_eq!(state.dragging_id(), Some(7));

        let request = state.drop_on("Hot Lead").expect("move requested");
        assert_eq!(request.card_id, 7);
        assert_eq!(request.target_column, "Hot Lead");
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn dropping_on_source_column_is_a_noop() {
        let mut state = DragState::default();
        state.start(7, "Cold Lead");
        state.enter_column("Cold Lead");
        assert_eq!(state.drop_on("Cold Lead"), None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn drop_without_drag_is_ignored() {
        let mut state = DragState::default();
        assert_eq!(state.drop_on("Hot Lead"), None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn leave_clears_hover_but_keeps_the_drag() {
        let mut state = DragState::default();
        state.start(3, "Cold Lead");
        state.enter_column("Estimate Sent");
        state.leave_column("Estimate Sent");
        assert!(!state.is_over("Estimate Sent"));
        assert_eq!(state.dragging_id(), Some(3));
    }

    #[test]
    fn stale_leave_from_previous_column_is_ignored() {
        let mut state = DragState::default();
        state.start(3, "Cold Lead");
        state.enter_column("Hot Lead");
        // Enter of the next column can fire before the previous leave
        state.enter_column("Estimate Sent");
        state.leave_column("Hot Lead");
        assert!(state.is_over("Estimate Sent"));
    }

    #[test]
    fn enter_without_drag_is_ignored() {
        let mut state = DragState::default();
        state.enter_column("Hot Lead");
        assert_eq!(state, DragState::Idle);
        assert!(!state.is_over("Hot Lead"));
    }

    #[test]
    fn cancel_resets_everything() {
        let mut state = DragState::default();
        state.start(3, "Cold Lead");
        state.enter_column("Hot Lead");
        state.cancel();
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.drop_on("Hot Lead"), None);
    }

    #[test]
    fn drop_from_dragging_without_hover_still_moves() {
        let mut state = DragState::default();
        state.start(9, "Hot Lead");
        let request = state.drop_on("Closed").expect("move requested");
        assert_eq!(request.target_column, "Closed");
    }
}
