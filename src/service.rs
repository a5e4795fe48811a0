use crate::auth::jwt::{Claims, TokenIssuer};
use crate::auth::password::{hash_password, verify_password};
use crate::constants::{COMMENTS, SUPPLIES, TESTIMONIALS, VOLUNTEERS};
use crate::error::CompassError;
use crate::models::{DeleteAck, InsertAck, Supply, Testimonial, User};
use crate::storage::Storage;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

pub struct CompassService<S: Storage> {
    storage: S,
    tokens: TokenIssuer,
}

impl<S: Storage> CompassService<S> {
    pub fn new(storage: S, jwt_secret: String, jwt_expiry_secs: u64) -> Self {
        CompassService {
            storage,
            tokens: TokenIssuer::new(jwt_secret, jwt_expiry_secs),
        }
    }

    // AUTH

    /// Check-then-insert: the existence check and the insert are two separate
    /// storage calls, so concurrent registrations with the same email can race
    /// past each other. Known weakness, kept as-is.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<(), CompassError> {
        info!("Registering user with email: {}", email);
        if self.storage.find_user_by_email(&email).await?.is_some() {
            return Err(CompassError::DuplicateUser);
        }

        let password_hash = hash_password(&password)?;
        self.storage
            .insert_user(User {
                name,
                email,
                password_hash,
            })
            .await
    }

    /// Unknown email and wrong password fail identically, so callers cannot
    /// probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, CompassError> {
        info!("Login attempt for email: {}", email);
        let user = self
            .storage
            .find_user_by_email(email)
            .await?
            .ok_or(CompassError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(CompassError::InvalidCredentials);
        }

        self.tokens.issue(&user.email)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, CompassError> {
        self.tokens.verify(token)
    }

    // SUPPLIES

    pub async fn create_supply(&self, supply: Supply) -> Result<InsertAck, CompassError> {
        info!("Creating supply '{}'", supply.title);
        self.insert(SUPPLIES, &supply).await
    }

    pub async fn list_supplies(&self) -> Result<Vec<Value>, CompassError> {
        debug!("Listing supplies");
        self.storage.list_documents(SUPPLIES).await
    }

    /// `None` for an unknown or malformed id; surfaced to clients as a null
    /// payload, not an error.
    pub async fn get_supply(&self, id: &str) -> Result<Option<Value>, CompassError> {
        debug!("Fetching supply {}", id);
        self.storage.find_document(SUPPLIES, id).await
    }

    pub async fn delete_supply(&self, id: &str) -> Result<DeleteAck, CompassError> {
        info!("Deleting supply {}", id);
        let deleted_count = self.storage.delete_document(SUPPLIES, id).await?;
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count,
        })
    }

    // TESTIMONIALS

    pub async fn create_testimonial(&self, testimonial: Testimonial) -> Result<(), CompassError> {
        info!("Creating testimonial from '{}'", testimonial.name);
        self.insert(TESTIMONIALS, &testimonial).await.map(|_| ())
    }

    pub async fn list_testimonials(&self) -> Result<Vec<Value>, CompassError> {
        debug!("Listing testimonials");
        self.storage.list_documents(TESTIMONIALS).await
    }

    // VOLUNTEERS

    pub async fn create_volunteer(&self, fields: Map<String, Value>) -> Result<(), CompassError> {
        info!("Creating volunteer");
        self.storage.insert_document(VOLUNTEERS, fields).await.map(|_| ())
    }

    pub async fn list_volunteers(&self) -> Result<Vec<Value>, CompassError> {
        debug!("Listing volunteers");
        self.storage.list_documents(VOLUNTEERS).await
    }

    // COMMENTS

    pub async fn create_comment(&self, fields: Map<String, Value>) -> Result<(), CompassError> {
        info!("Creating comment");
        self.storage.insert_document(COMMENTS, fields).await.map(|_| ())
    }

    pub async fn list_comments(&self) -> Result<Vec<Value>, CompassError> {
        debug!("Listing comments");
        self.storage.list_documents(COMMENTS).await
    }

    async fn insert<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<InsertAck, CompassError> {
        let fields = to_document(record)?;
        let inserted_id = self.storage.insert_document(collection, fields).await?;
        debug!("Inserted {} document {}", collection, inserted_id);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }
}

fn to_document<T: Serialize>(record: &T) -> Result<Map<String, Value>, CompassError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CompassError::InternalServerError(
            "Record did not serialize to an object".to_string(),
        )),
        Err(e) => Err(CompassError::InternalServerError(format!(
            "Serialization error: {}",
            e
        ))),
    }
}
