//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **users_api**: reqwest-backed client for the REST users backend.
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no page logic.

pub mod users_api;
