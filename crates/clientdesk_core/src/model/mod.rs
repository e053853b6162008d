//! Client domain model and field rules.
//!
//! # Responsibility
//! - Define the client record used by store, service and callers.
//! - Own the pure validation rule set applied before persistence.
//!
//! # Invariants
//! - A client is identified by its store-assigned `ClientId`.
//! - Validation never fails; it returns a possibly empty message list.

pub mod client;
pub mod validation;
