//! Session-scoped user state.
//!
//! Holds the current user's identity and resolved city for the lifetime of
//! one client session. The store is an explicitly constructed value handed
//! to consumers by reference; nothing is persisted across restarts.

use dashboard_types::User;

/// Mutable holder for the session's current user view.
///
/// `set_user_data` derives the resolved city from the user's own city, so
/// the two fields only diverge through a later [`SessionStore::set_user_city`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    user_city: Option<String>,
    user_data: Option<User>,
}

impl SessionStore {
    /// Empty store with no user resolved yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// City the session currently resolves to, if any.
    #[must_use]
    pub fn user_city(&self) -> Option<&str> {
        self.user_city.as_deref()
    }

    /// Current user profile, if one was stored.
    #[must_use]
    pub fn user_data(&self) -> Option<&User> {
        self.user_data.as_ref()
    }

    /// Overwrite the resolved city only.
    pub fn set_user_city(&mut self, city: impl Into<String>) {
        self.user_city = Some(city.into());
    }

    /// Overwrite the user profile and derive the resolved city from it.
    pub fn set_user_data(&mut self, user: User) {
        self.user_city = Some(user.city.clone());
        self.user_data = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user(city: &str) -> User {
        User {
            id: 1,
            name: "A".to_owned(),
            city: city.to_owned(),
        }
    }

    #[test]
    fn starts_with_nothing_resolved() {
        let store = SessionStore::new();
        assert!(store.user_city().is_none());
        assert!(store.user_data().is_none());
    }

    #[test]
    fn set_user_data_derives_the_city() {
        let mut store = SessionStore::new();
        store.set_user_data(demo_user("X"));

        assert_eq!(store.user_city(), Some("X"));
        assert_eq!(store.user_data().map(|user| user.city.as_str()), Some("X"));
    }

    #[test]
    fn set_user_city_lets_the_fields_diverge() {
        let mut store = SessionStore::new();
        store.set_user_data(demo_user("X"));
        store.set_user_city("Y");

        assert_eq!(store.user_city(), Some("Y"));
        assert_eq!(store.user_data().map(|user| user.city.as_str()), Some("X"));
    }

    #[test]
    fn set_user_data_overwrites_a_diverged_city() {
        let mut store = SessionStore::new();
        store.set_user_city("Y");
        store.set_user_data(demo_user("X"));

        assert_eq!(store.user_city(), Some("X"));
    }
}
