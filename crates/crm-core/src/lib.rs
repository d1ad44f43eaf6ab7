//! CRM Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - store: Storage port and entity stores
//! - pipeline / followup: Pure view models over store snapshots
//! - auth: Mock authentication and session handling
//! - seed: Bundled fallback data

pub mod auth;
pub mod domain;
pub mod followup;
pub mod pipeline;
pub mod seed;
pub mod store;
