mod web;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use carlot_db::SalesDb;
use tracing::info;

use crate::web::WebState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://db.sqlite?mode=rwc".to_string());
    let db = SalesDb::connect(&database_url).await?;
    if let Ok(seed_csv) = std::env::var("SEED_CSV") {
        db.seed_from_csv(&PathBuf::from(seed_csv)).await?;
    }
    let static_dir =
        PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));
    std::fs::create_dir_all(&static_dir)?;
    info!("serving report artifacts from {}", static_dir.display());
    let state = WebState {
        db,
        static_dir: Arc::new(static_dir),
    };
    web::start_web(state).await
}
