pub mod error;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{FromRef, Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use carlot_api_types::{ReportArtifact, SaleDimension, SaleRecord, SaleRecordForm};
use carlot_charts::{aggregate, render_sales_report};
use carlot_db::SalesDb;
use tower_http::services::ServeDir;

use self::error::ApiError;

/// Well known artifact name shared by both report kinds; the most recently
/// generated chart wins.
const REPORT_IMAGE_NAME: &str = "graph.png";

async fn list_sales(State(db): State<SalesDb>) -> Result<Json<Vec<SaleRecord>>, ApiError> {
    Ok(Json(db.all_sales().await?))
}

async fn get_sale(
    State(db): State<SalesDb>,
    Path(id): Path<i32>,
) -> Result<Json<SaleRecord>, ApiError> {
    Ok(Json(db.get_sale(id).await?))
}

async fn add_sale(
    State(db): State<SalesDb>,
    Json(form): Json<SaleRecordForm>,
) -> Result<(StatusCode, Json<SaleRecord>), ApiError> {
    form.validate()?;
    let record = db.insert_sale(form).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn edit_sale(
    State(db): State<SalesDb>,
    Path(id): Path<i32>,
    Json(form): Json<SaleRecordForm>,
) -> Result<Json<SaleRecord>, ApiError> {
    form.validate()?;
    Ok(Json(db.update_sale(id, form).await?))
}

async fn delete_sale(State(db): State<SalesDb>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    db.delete_sale(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn sales_report(
    State(db): State<SalesDb>,
    State(static_dir): State<Arc<PathBuf>>,
    Path(dimension): Path<String>,
) -> Result<Json<ReportArtifact>, ApiError> {
    let dimension: SaleDimension = dimension.parse()?;
    let records = db.all_sales().await?;
    let result = aggregate(&records, dimension);
    let target = static_dir.join(REPORT_IMAGE_NAME);
    let artifact = render_sales_report(&result, dimension, &target)?;
    Ok(Json(artifact))
}

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) db: SalesDb,
    pub(crate) static_dir: Arc<PathBuf>,
}

impl FromRef<WebState> for SalesDb {
    fn from_ref(input: &WebState) -> Self {
        input.db.clone()
    }
}

impl FromRef<WebState> for Arc<PathBuf> {
    fn from_ref(input: &WebState) -> Self {
        input.static_dir.clone()
    }
}

pub(crate) async fn start_web(state: WebState) -> anyhow::Result<()> {
    // build our application with a route
    let app = Router::new()
        .route("/sales", get(list_sales).post(add_sale))
        .route(
            "/sales/{id}",
            get(get_sale).put(edit_sale).delete(delete_sale),
        )
        .route("/reports/{dimension}", get(sales_report))
        .nest_service("/static", ServeDir::new(state.static_dir.as_path()))
        .fallback(fallback)
        .with_state(state);

    let port = std::env::var("PORT")
        .map(|p| p.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
