//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the client data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories do not validate records; the service caller does.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod client_repo;
