use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::model::pegawai::{NewPegawai, Pegawai};
use crate::query::{find_by_nama, find_by_nik};
use crate::salary;
use crate::store::{self, StoreError};
use crate::utils::nik_cache;
use crate::utils::nik_filter;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreatePegawai {
    #[schema(example = "Budi Santoso")]
    pub nama: String,

    #[schema(example = "3175091201900001")]
    pub nik: String,

    #[schema(example = "IIIC")]
    pub golongan: String,

    #[schema(example = "Nikah")]
    pub status_keluarga: String,

    #[schema(example = 2)]
    #[serde(default)]
    pub jumlah_anak: u32,

    #[schema(example = "Lektor")]
    pub jabatan: String,
}

#[derive(Serialize, ToSchema)]
pub struct PegawaiListResponse {
    pub data: Vec<Pegawai>,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Substring to match against NIK
    pub nik: Option<String>,
    /// Substring to match against name
    pub nama: Option<String>,
}

/// true  => NIK AVAILABLE
/// false => NIK TAKEN
pub async fn is_nik_available(nik: &str, pool: &SqlitePool) -> bool {
    // 1️⃣ Cuckoo filter — fast negative
    // if the filter says not exist then it is definitely available
    if !nik_filter::might_exist(nik) {
        return true;
    }

    // 2️⃣ Moka cache — fast positive
    if nik_cache::is_taken(nik).await {
        return false;
    }

    // 3️⃣ Database fallback; the unique index stays the authority
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM pegawai WHERE nik = ? LIMIT 1)")
            .bind(nik)
            .fetch_one(pool)
            .await
            .unwrap_or(true); // fail-safe

    !exists
}

/// Create Pegawai
#[utoipa::path(
    post,
    path = "/api/v1/pegawai",
    request_body = CreatePegawai,
    responses(
        (status = 201, description = "Pegawai saved", body = Object, example = json!({
            "message": "Pegawai saved successfully",
            "id": 1
        })),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "NIK already registered", body = Object, example = json!({
            "error": "NIK already registered. Use a different NIK."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pegawai"
)]
pub async fn create_pegawai(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreatePegawai>,
) -> impl Responder {
    let nama = payload.nama.trim();
    let nik = payload.nik.trim();

    if nama.is_empty() || nik.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Nama and NIK must not be empty"
        }));
    }

    let golongan = payload.golongan.trim();
    let status_keluarga = payload.status_keluarga.trim();
    let jabatan = payload.jabatan.trim();

    if golongan.is_empty() || status_keluarga.is_empty() || jabatan.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Golongan, status keluarga, and jabatan must be provided"
        }));
    }

    if !is_nik_available(nik, pool.get_ref()).await {
        return HttpResponse::Conflict().json(json!({
            "error": "NIK already registered. Use a different NIK."
        }));
    }

    // The breakdown is computed here, at insert time, and stored
    // redundantly with the record.
    let breakdown = salary::calculate(golongan, status_keluarga, payload.jumlah_anak, jabatan);

    let data = NewPegawai {
        nama: nama.to_string(),
        nik: nik.to_string(),
        golongan: golongan.to_string(),
        status_keluarga: status_keluarga.to_string(),
        jumlah_anak: payload.jumlah_anak,
        jabatan: jabatan.to_string(),
        gaji_pokok: breakdown.gaji_pokok,
        tunjangan_keluarga: breakdown.tunjangan_keluarga,
        tunjangan_anak: breakdown.tunjangan_anak,
        tunjangan_jabatan: breakdown.tunjangan_jabatan,
        gaji_bersih: breakdown.gaji_bersih,
        tanggal_input: Utc::now().naive_utc(),
    };

    match store::insert(pool.get_ref(), &data).await {
        Ok(id) => {
            // keep the filter and cache populated after a successful insert
            nik_filter::insert(nik);
            nik_cache::mark_taken(nik).await;

            HttpResponse::Created().json(json!({
                "message": "Pegawai saved successfully",
                "id": id
            }))
        }
        Err(StoreError::Validation(msg)) => HttpResponse::BadRequest().json(json!({
            "error": msg
        })),
        Err(StoreError::DuplicateNik(_)) => HttpResponse::Conflict().json(json!({
            "error": "NIK already registered. Use a different NIK."
        })),
        Err(e) => {
            error!(error = %e, "Failed to save pegawai");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}

/// List every Pegawai in insertion order
#[utoipa::path(
    get,
    path = "/api/v1/pegawai",
    responses(
        (status = 200, description = "Full record listing", body = PegawaiListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pegawai"
)]
pub async fn list_pegawai(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let data = store::list_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to fetch pegawai list");
        ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(PegawaiListResponse {
        total: data.len(),
        data,
    }))
}

/// Search by NIK or name substring
#[utoipa::path(
    get,
    path = "/api/v1/pegawai/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching records, store order", body = PegawaiListResponse),
        (status = 400, description = "No search term provided"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pegawai"
)]
pub async fn search_pegawai(
    pool: web::Data<SqlitePool>,
    params: web::Query<SearchQuery>,
) -> actix_web::Result<impl Responder> {
    let nik_term = params.nik.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let nama_term = params
        .nama
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let result = if let Some(term) = nik_term {
        find_by_nik(pool.get_ref(), term).await
    } else if let Some(term) = nama_term {
        find_by_nama(pool.get_ref(), term).await
    } else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Provide a nik or nama search term"
        })));
    };

    let data = result.map_err(|e| {
        error!(error = %e, "Search failed");
        ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(PegawaiListResponse {
        total: data.len(),
        data,
    }))
}

/// Delete Pegawai
#[utoipa::path(
    delete,
    path = "/api/v1/pegawai/{id}",
    params(
        ("id", Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pegawai"
)]
pub async fn delete_pegawai(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let existing = store::find_by_id(pool.get_ref(), id).await.map_err(|e| {
        error!(error = %e, id, "Failed to fetch pegawai");
        ErrorInternalServerError("Database error")
    })?;

    // Deleting an id that is already gone is a no-op, not an error:
    // the UI may fire the same confirmed delete more than once.
    let Some(pegawai) = existing else {
        return Ok(HttpResponse::Ok().json(json!({
            "message": "Nothing to delete"
        })));
    };

    store::delete_by_id(pool.get_ref(), id).await.map_err(|e| {
        error!(error = %e, id, "Failed to delete pegawai");
        ErrorInternalServerError("Database error")
    })?;

    nik_filter::remove(&pegawai.nik);
    nik_cache::invalidate(&pegawai.nik).await;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
