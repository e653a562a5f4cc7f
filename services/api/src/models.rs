//! Entity models and request payloads

use serde::{Serialize, de::DeserializeOwned};

pub mod item;
pub mod person;
pub mod user;

pub use item::{Item, NewItem};
pub use person::{NewPerson, Person};
pub use user::{LoginRequest, RegisterRequest, User};

/// An entity persisted as a document in its own collection
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Collection the entity is stored in
    const COLLECTION: &'static str;

    /// Store-assigned identifier, if the entity has been saved
    fn id(&self) -> Option<&str>;
}
