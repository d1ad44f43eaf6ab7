//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast message stays up
const TOAST_MS: u32 = 3000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload entity data from the stores - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload entity data from the stores - write
    set_reload_trigger: WriteSignal<u32>,
    /// Transient toast message - read
    pub toast: ReadSignal<Option<(u32, String)>>,
    /// Transient toast message - write
    set_toast: WriteSignal<Option<(u32, String)>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        toast: (
            ReadSignal<Option<(u32, String)>>,
            WriteSignal<Option<(u32, String)>>,
        ),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Trigger a reload of store-backed data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a transient toast message
    ///
    /// Each toast carries a sequence number so the timed clear of an
    /// older toast cannot wipe a newer one.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        let seq = self.toast.get_untracked().map(|(n, _)| n + 1).unwrap_or(0);
        self.set_toast.set(Some((seq, message)));

        let set_toast = self.set_toast;
        let toast = self.toast;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if toast.get_untracked().map(|(n, _)| n) == Some(seq) {
                set_toast.set(None);
            }
        });
    }
}
