use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

use crate::model::pegawai::Pegawai;
use crate::store;

#[derive(Serialize, ToSchema)]
pub struct SummaryResponse {
    #[schema(example = 12)]
    pub total_pegawai: usize,

    /// Sum of gaji_bersih over all records, whole rupiah
    #[schema(example = 65_040_000_i64)]
    pub total_gaji: i64,

    /// Average gaji_bersih; 0 when the store is empty
    #[schema(example = 5_420_000.0)]
    pub rata_gaji: f64,

    /// The five most recently entered records, newest first
    pub recent: Vec<Pegawai>,
}

/// Dashboard summary
#[utoipa::path(
    get,
    path = "/api/v1/pegawai/summary",
    responses(
        (status = 200, description = "Dashboard statistics", body = SummaryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn summary(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let all = store::list_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to load dashboard data");
        ErrorInternalServerError("Database error")
    })?;

    let total_pegawai = all.len();
    let total_gaji: i64 = all.iter().map(|p| p.gaji_bersih).sum();
    let rata_gaji = if total_pegawai > 0 {
        total_gaji as f64 / total_pegawai as f64
    } else {
        0.0
    };
    let recent: Vec<Pegawai> = all.iter().rev().take(5).cloned().collect();

    Ok(HttpResponse::Ok().json(SummaryResponse {
        total_pegawai,
        total_gaji,
        rata_gaji,
        recent,
    }))
}
