use booking_site::{
    load_profile, resolve_profile_path, router, session::Credentials, AppState,
};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let profile_path = resolve_profile_path();
    let profile = load_profile(&profile_path).await;
    info!(
        name = %profile.name,
        key = %profile.storage_key(),
        path = %profile_path.display(),
        "serving generated site"
    );

    let state = AppState::new(profile_path, profile, Credentials::from_env());
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
