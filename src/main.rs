use folio::services::session::AdminCredentials;
use folio::services::uploads::AssetStore;
use folio::{db, routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let uploads_dir = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".into());
    let public_base = std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let admin = AdminCredentials::from_env();
    if admin.is_default() {
        tracing::warn!("default admin credentials in use; set ADMIN_USERNAME and ADMIN_PASSWORD");
    }

    let assets = AssetStore::new(uploads_dir, public_base);
    let state = state::AppState::new(pool, assets, admin);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
