use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::User;

/// In-memory user registry. Emails are unique; lookups go through a secondary
/// email index so login does not scan the map.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<DashMap<Uuid, User>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false (and stores nothing) when the email is already taken.
    pub fn insert(&self, user: User) -> bool {
        let email = user.email.to_lowercase();
        if self.by_email.contains_key(&email) {
            return false;
        }
        self.by_email.insert(email, user.id);
        self.users.insert(user.id, user);
        true
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|u| u.clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.by_email.get(&email.to_lowercase())?;
        self.get(id)
    }
}
