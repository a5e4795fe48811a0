use crate::error::CompassError;
use crate::models::User;
use crate::storage::Storage;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Document id key, matching what the wire format exposes to clients.
pub const ID_KEY: &str = "_id";

/// In-memory document store. Users live in their own list (no unique index, so
/// duplicate emails are representable, exactly like the real collection);
/// everything else is a named collection of JSON documents in insertion order.
pub struct InMemoryStorage {
    users: Mutex<Vec<User>>,
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(Vec::new()),
            collections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_user(&self, user: User) -> Result<(), CompassError> {
        self.users.lock().await.push(user);
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CompassError> {
        // For production: use a database index on email
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_document(
        &self,
        collection: &str,
        mut fields: Map<String, Value>,
    ) -> Result<String, CompassError> {
        let id = Uuid::new_v4().to_string();
        fields.insert(ID_KEY.to_string(), Value::String(id.clone()));
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Value::Object(fields));
        Ok(id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>, CompassError> {
        Ok(self
            .collections
            .lock()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Value>, CompassError> {
        Ok(self
            .collections
            .lock()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc_id_matches(doc, id)).cloned()))
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<u64, CompassError> {
        let mut collections = self.collections.lock().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|doc| doc_id_matches(doc, id)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

fn doc_id_matches(doc: &Value, id: &str) -> bool {
    doc.get(ID_KEY).and_then(Value::as_str) == Some(id)
}
