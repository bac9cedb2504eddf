// src/app/session.rs  -  Signed-in user slot
use serde::{Deserialize, Serialize};

use crate::i18n::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Farmer,
    Worker,
}

impl Role {
    pub fn label_key(self) -> &'static str {
        match self {
            Role::Farmer => keys::farmer,
            Role::Worker => keys::worker,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Role::Farmer => Role::Worker,
            Role::Worker => Role::Farmer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id:       String,
    pub name:     String,
    pub phone:    String,
    pub village:  String,
    pub role:     Role,
    pub verified: bool,
}

/// At most one current user. No expiry; cleared only by logout.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    pub fn sign_in(&mut self, user: User) {
        log::info!("[session] signed in {} ({:?})", user.id, user.role);
        self.current = Some(user);
    }

    pub fn sign_out(&mut self) -> Option<User> {
        let user = self.current.take();
        if let Some(u) = &user {
            log::info!("[session] signed out {}", u.id);
        }
        user
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn user_mut(&mut self) -> Option<&mut User> {
        self.current.as_mut()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id:       "FC-000001".into(),
            name:     "Asha".into(),
            phone:    "9876543210".into(),
            village:  String::new(),
            role:     Role::Worker,
            verified: true,
        }
    }

    #[test]
    fn sign_in_then_out() {
        let mut s = Session::default();
        assert!(!s.is_signed_in());
        s.sign_in(user());
        assert_eq!(s.user().map(|u| u.name.as_str()), Some("Asha"));
        assert_eq!(s.sign_out(), Some(user()));
        assert!(s.user().is_none());
        assert_eq!(s.sign_out(), None);
    }

    #[test]
    fn second_sign_in_replaces_first() {
        let mut s = Session::default();
        s.sign_in(user());
        s.sign_in(User { name: "Bhavesh".into(), ..user() });
        assert_eq!(s.user().unwrap().name, "Bhavesh");
    }
}
