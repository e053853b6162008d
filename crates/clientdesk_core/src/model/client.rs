//! Client domain model.
//!
//! # Responsibility
//! - Define the canonical client record shared by store, validator and service.
//! - Keep identity semantics (`id`) separate from structural equality.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on create.
//! - An assigned `id` never changes and is never reused after deletion.
//! - `contacts` is never persisted by this crate; loads always return it empty.

use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the store on insert.
pub type ClientId = i64;

/// Identifier of a contact owned by a client.
///
/// Contacts live outside this crate; the type only keeps the relation visible
/// on the record shape.
pub type ContactId = i64;

/// Company contact and address record.
///
/// Optional text fields use `None` for "never provided". An empty string is a
/// provided-but-blank value and round-trips through the store unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned key. `None` for a record that has not been created yet.
    #[serde(default)]
    pub id: Option<ClientId>,
    pub company_name: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    /// Related contacts. Ignored on save, always empty on load.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ContactId>,
}

impl Client {
    /// Creates an unsaved client with only the company name set.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }

    /// Creates a client carrying an already-assigned store id.
    ///
    /// Used by row mapping and by callers editing an existing record.
    pub fn with_id(id: ClientId, company_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(company_name)
        }
    }

    /// Returns whether this record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Identity comparison: two records are the same client when both carry
    /// the same assigned id. Unsaved records have no identity.
    pub fn same_identity(&self, other: &Client) -> bool {
        matches!((self.id, other.id), (Some(left), Some(right)) if left == right)
    }
}
