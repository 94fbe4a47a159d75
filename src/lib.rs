pub mod app;
pub mod errors;
pub mod escape;
pub mod handlers;
pub mod models;
pub mod session;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_profile, resolve_profile_path};
