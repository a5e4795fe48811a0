use serde::{Deserialize, Serialize};

/// Registered account. Created once at registration, never updated or deleted.
/// Email uniqueness is checked by the service before insert, not by the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
