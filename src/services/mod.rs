//! Service Layer
//!
//! Async wrappers around the core stores, organized by domain. Every call
//! suspends on a simulated network latency before touching the store, so
//! the UI behaves as it would against a real backend. Errors come back as
//! strings ready for the banner/toast layer.

pub mod auth;
pub mod columns;
pub mod leads;
pub mod reminders;

use gloo_timers::future::TimeoutFuture;

/// Simulated backend latency
pub(crate) async fn delay(ms: u32) {
    TimeoutFuture::new(ms).await;
}
