use crate::models::BusinessProfile;
use crate::session::Credentials;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub profile_path: PathBuf,
    pub profile: Arc<RwLock<BusinessProfile>>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(profile_path: PathBuf, profile: BusinessProfile, credentials: Credentials) -> Self {
        Self {
            profile_path,
            profile: Arc::new(RwLock::new(profile)),
            credentials: Arc::new(credentials),
        }
    }
}
