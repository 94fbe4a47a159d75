use crate::models::BusinessProfile;
use crate::storage::Storage;
use std::env;

const SESSION_SUFFIX: &str = "_admin_session";
const AUTHENTICATED: &str = "true";

/// The single username/password pair that opens the admin dashboard.
///
/// This is a navigation gate: the pair ships in plain text inside the
/// generated admin document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl Credentials {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            username: env::var("ADMIN_USERNAME").unwrap_or(defaults.username),
            password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.password),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

pub fn session_key(profile: &BusinessProfile) -> String {
    format!("{}{SESSION_SUFFIX}", profile.key_stem())
}

pub struct AdminSession<'a, S: Storage> {
    storage: &'a mut S,
    key: String,
    credentials: Credentials,
}

impl<'a, S: Storage> AdminSession<'a, S> {
    pub fn new(storage: &'a mut S, profile: &BusinessProfile, credentials: Credentials) -> Self {
        Self {
            storage,
            key: session_key(profile),
            credentials,
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if !self.credentials.matches(username, password) {
            return false;
        }
        self.storage.set_item(&self.key, AUTHENTICATED.to_string());
        true
    }

    pub fn logout(&mut self) {
        self.storage.remove_item(&self.key);
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.get_item(&self.key).as_deref() == Some(AUTHENTICATED)
    }
}
