use crate::errors::SiteError;
use crate::models::{BookingRecord, BookingStatus, BusinessProfile};
use serde_json::Value;
use std::{collections::HashMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

/// String key/value store with the semantics of browser `localStorage`.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Append-only booking log persisted as one JSON array under a single key.
///
/// Every write is a read-modify-write of the whole array. Two writers on the
/// same storage (two browser tabs) can therefore lose an update; the last
/// write wins.
pub struct BookingStore<'a, S: Storage> {
    storage: &'a mut S,
    key: String,
}

impl<'a, S: Storage> BookingStore<'a, S> {
    pub fn new(storage: &'a mut S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn for_profile(storage: &'a mut S, profile: &BusinessProfile) -> Self {
        Self::new(storage, profile.storage_key())
    }

    /// Absent or unreadable content loads as an empty log. Entries that do
    /// not parse as bookings are skipped, not fatal.
    pub fn load_all(&self) -> Vec<BookingRecord> {
        self.load_entries().into_iter().filter_map(parse_entry).collect()
    }

    /// Entries this store cannot read are written back untouched.
    pub fn append(&mut self, record: BookingRecord) -> Result<(), SiteError> {
        let mut entries = self.load_entries();
        if entries
            .iter()
            .filter_map(entry_id)
            .any(|id| id == record.id)
        {
            return Err(SiteError::DuplicateBooking(record.id));
        }
        entries.push(serde_json::to_value(&record)?);
        self.persist(&entries)
    }

    pub fn set_status(&mut self, id: &str, status: BookingStatus) -> Result<BookingRecord, SiteError> {
        let mut entries = self.load_entries();
        let entry = entries
            .iter_mut()
            .find(|entry| entry_id(entry).as_deref() == Some(id))
            .ok_or_else(|| SiteError::BookingNotFound(id.to_string()))?;
        let mut updated: BookingRecord = serde_json::from_value(entry.clone())?;
        updated.status = status;
        entry["status"] = Value::from(status.as_str());
        self.persist(&entries)?;
        Ok(updated)
    }

    fn load_entries(&self) -> Vec<Value> {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(key = %self.key, "discarding unreadable booking log: {err}");
                Vec::new()
            }
        }
    }

    fn persist(&mut self, entries: &[Value]) -> Result<(), SiteError> {
        let payload = serde_json::to_string(entries)?;
        self.storage.set_item(&self.key, payload);
        Ok(())
    }
}

fn parse_entry(entry: Value) -> Option<BookingRecord> {
    match serde_json::from_value(entry) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!("skipping unreadable booking entry: {err}");
            None
        }
    }
}

/// Id of an entry in the same string form `BookingRecord` reads it in.
fn entry_id(entry: &Value) -> Option<String> {
    match entry.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

pub fn resolve_profile_path() -> PathBuf {
    if let Ok(path) = env::var("APP_PROFILE_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/profile.json")
}

pub async fn load_profile(path: &Path) -> BusinessProfile {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<BusinessProfile>(&bytes) {
            Ok(profile) => match profile.validate() {
                Ok(()) => profile,
                Err(err) => {
                    error!("invalid profile file: {err}");
                    BusinessProfile::default()
                }
            },
            Err(err) => {
                error!("failed to parse profile file: {err}");
                BusinessProfile::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BusinessProfile::default(),
        Err(err) => {
            error!("failed to read profile file: {err}");
            BusinessProfile::default()
        }
    }
}

pub async fn persist_profile(path: &Path, profile: &BusinessProfile) -> Result<(), SiteError> {
    let payload = serde_json::to_vec_pretty(profile)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, payload).await?;
    Ok(())
}
