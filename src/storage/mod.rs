use crate::error::CompassError;
use crate::models::User;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Contract over the backing document store. The real database is an external
/// collaborator reached over the network; handlers and the service only ever see
/// this trait.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts unconditionally; email uniqueness is the caller's concern
    /// (the users collection carries no unique index).
    async fn insert_user(&self, user: User) -> Result<(), CompassError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CompassError>;

    /// Inserts `fields` verbatim into `collection` and returns the generated id.
    async fn insert_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<String, CompassError>;

    /// Every document in `collection`, in insertion order.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>, CompassError>;

    /// `None` for an unknown or malformed id.
    async fn find_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Value>, CompassError>;

    /// Returns the number of documents removed (0 or 1).
    async fn delete_document(&self, collection: &str, id: &str) -> Result<u64, CompassError>;
}

pub mod in_memory;
