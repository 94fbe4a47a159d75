use crate::errors::SiteError;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Write as _;

const BOOKINGS_SUFFIX: &str = "_bookings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ColorTheme {
    pub fn new(primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub services: Vec<String>,
    /// Overrides the derived `<slug>_bookings` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Sample Business".to_string(),
            category: "service".to_string(),
            keywords: vec!["quality".to_string(), "trust".to_string()],
            phone: "010-0000-0000".to_string(),
            email: "info@example.com".to_string(),
            address: "Seoul, Gangnam-gu".to_string(),
            services: vec![
                "Free Consultation".to_string(),
                "Basic Service".to_string(),
                "Premium Service".to_string(),
            ],
            storage_key: None,
        }
    }
}

impl BusinessProfile {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty() {
            return Err(SiteError::EmptyName);
        }
        Ok(())
    }

    /// Key under which this business's bookings are persisted in the browser.
    ///
    /// Two sites only share a collection when they share a key, so the key is
    /// derived from the business name unless explicitly overridden.
    pub fn storage_key(&self) -> String {
        match self.storage_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => format!("{}{BOOKINGS_SUFFIX}", self.slug()),
        }
    }

    /// Stem shared by every key this business owns.
    pub fn key_stem(&self) -> String {
        let key = self.storage_key();
        match key.strip_suffix(BOOKINGS_SUFFIX) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => key,
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    // Slugs never contain `_`, so the hex fallback cannot collide with a name
    // that happens to spell the same digits.
    if slug.is_empty() {
        slug.push('_');
        for byte in value.as_bytes() {
            let _ = write!(slug, "{byte:02x}");
        }
    }
    slug
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Completed")]
    Completed,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// Fields a customer fills in on the public booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub service: String,
    pub date: String,
    #[serde(default)]
    pub message: String,
}

/// One stored booking. Reading is lenient toward logs written by older
/// generated pages: numeric ids (`Date.now() + Math.random()`) are kept as
/// their decimal text, and `null` or missing text fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub business: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub phone: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub email: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub service: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub date: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub message: String,
    #[serde(default)]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(de::Error::custom(format!("invalid booking id: {other}"))),
    }
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookingRecord {
    pub fn new(business: &str, request: BookingRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            business: business.to_string(),
            name: request.name,
            phone: request.phone,
            email: request.email,
            service: request.service,
            date: request.date,
            message: request.message,
            status: BookingStatus::Pending,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub pending: usize,
    pub completed: usize,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: BusinessProfile,
    pub theme: ColorTheme,
    pub storage_key: String,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub storage_key: String,
    pub theme: ColorTheme,
    pub public_site: String,
    pub admin_dashboard: String,
}
