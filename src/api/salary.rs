use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::salary;

/// Calculator inputs for the entry-form preview. Every parameter is
/// optional; a missing value behaves like the corresponding empty input.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SalaryQuery {
    #[param(example = "IIIC")]
    pub golongan: Option<String>,

    #[param(example = "Nikah")]
    pub status_keluarga: Option<String>,

    #[param(example = 2)]
    pub jumlah_anak: Option<u32>,

    #[param(example = "Lektor")]
    pub jabatan: Option<String>,
}

/// Salary breakdown preview
#[utoipa::path(
    get,
    path = "/api/v1/salary",
    params(SalaryQuery),
    responses(
        (status = 200, description = "Computed breakdown", body = crate::salary::Breakdown)
    ),
    tag = "Salary"
)]
pub async fn preview_salary(params: web::Query<SalaryQuery>) -> impl Responder {
    let breakdown = salary::calculate(
        params.golongan.as_deref().unwrap_or(""),
        params.status_keluarga.as_deref().unwrap_or(""),
        params.jumlah_anak.unwrap_or(0),
        params.jabatan.as_deref().unwrap_or(""),
    );

    HttpResponse::Ok().json(breakdown)
}
