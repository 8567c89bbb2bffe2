use std::collections::BTreeMap;

use coffeeshop_models::{User, UserId};

/// Users loaded from the backend, keyed by id.
///
/// Loads only ever add or overwrite: an id that is missing from a later batch
/// keeps its previous entry. Iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    users: BTreeMap<UserId, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Insert every user, replacing whole entries that share an id.
    ///
    /// Returns how many users were written.
    pub fn upsert<I>(&mut self, users: I) -> usize
    where
        I: IntoIterator<Item = User>,
    {
        let mut written = 0;
        for user in users {
            self.users.insert(user.id, user);
            written += 1;
        }
        written
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }
}

impl FromIterator<User> for UserStore {
    fn from_iter<T: IntoIterator<Item = User>>(iter: T) -> Self {
        let mut store = Self::new();
        store.upsert(iter);
        store
    }
}
