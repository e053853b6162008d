//! Client use-case service.
//!
//! # Responsibility
//! - Provide the caller-facing CRUD and validation entry points.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Validation and persistence are separate calls. Callers run
//!   `validate_client` first and only call `create_client`/`update_client`
//!   when it returns no messages.
//! - Repository errors are returned unchanged; nothing is retried or masked.
//! - Service layer remains storage-agnostic.

use crate::model::client::{Client, ClientId};
use crate::model::validation::validate_client;
use crate::repo::client_repo::{ClientRepository, RepoResult};
use log::debug;

/// Use-case service wrapper for client CRUD operations.
pub struct ClientService<R: ClientRepository> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all clients ordered by company name, then id.
    pub fn list_clients(&self) -> RepoResult<Vec<Client>> {
        self.repo.list_clients()
    }

    /// Gets one client by id. Missing ids surface as `RepoError::NotFound`.
    pub fn get_client(&self, id: ClientId) -> RepoResult<Client> {
        self.repo.get_client(id)
    }

    /// Persists a new client and returns its generated id.
    ///
    /// The record must already have passed `validate_client`.
    pub fn create_client(&self, client: &Client) -> RepoResult<ClientId> {
        self.repo.create_client(client)
    }

    /// Overwrites an existing client identified by `client.id`.
    ///
    /// The record must already have passed `validate_client`. Updating an id
    /// with no matching row is not an error.
    pub fn update_client(&self, client: &Client) -> RepoResult<()> {
        self.repo.update_client(client)
    }

    /// Deletes a client by id. Confirmation is the caller's concern.
    pub fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        self.repo.delete_client(id)
    }

    /// Returns sorted validation messages; empty means the record is valid.
    pub fn validate_client(&self, client: &Client) -> Vec<String> {
        let errors = validate_client(client);
        debug!(
            "event=client_validate module=service status=ok error_count={}",
            errors.len()
        );
        errors
    }
}
