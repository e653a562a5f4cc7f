//! Application state shared across handlers

use common::documents::DocumentStoreRef;

use crate::{
    repositories::{ItemRepository, PeopleRepository, UserRepository},
    session::SessionRegistry,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStoreRef,
    pub item_repository: ItemRepository,
    pub people_repository: PeopleRepository,
    pub user_repository: UserRepository,
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Build the state for a store, starting with no active sessions
    pub fn new(store: DocumentStoreRef) -> Self {
        Self {
            item_repository: ItemRepository::new(store.clone()),
            people_repository: PeopleRepository::new(store.clone()),
            user_repository: UserRepository::new(store.clone()),
            sessions: SessionRegistry::new(),
            store,
        }
    }
}
