use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::error;

use crate::model::pegawai::Pegawai;
use crate::store;

/// Fixed export column order; consumers depend on it.
const CSV_HEADER: [&str; 11] = [
    "Nama",
    "NIK",
    "Golongan",
    "Status Keluarga",
    "Jumlah Anak",
    "Jabatan",
    "Gaji Pokok",
    "Tunjangan Keluarga",
    "Tunjangan Anak",
    "Tunjangan Jabatan",
    "Gaji Bersih",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render records as CSV text: string fields double-quoted, numeric
/// fields bare.
pub fn to_csv(records: &[Pegawai]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for p in records {
        lines.push(
            [
                quote(&p.nama),
                quote(&p.nik),
                quote(&p.golongan),
                quote(&p.status_keluarga),
                p.jumlah_anak.to_string(),
                quote(&p.jabatan),
                p.gaji_pokok.to_string(),
                p.tunjangan_keluarga.to_string(),
                p.tunjangan_anak.to_string(),
                p.tunjangan_jabatan.to_string(),
                p.gaji_bersih.to_string(),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

/// Export all records as CSV
#[utoipa::path(
    get,
    path = "/api/v1/pegawai/export",
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Export"
)]
pub async fn export_csv(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let all = store::list_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to export pegawai");
        ErrorInternalServerError("Database error")
    })?;

    let filename = format!("gaji-pegawai-{}.csv", Utc::now().format("%Y-%m-%d"));

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(to_csv(&all)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Pegawai {
        Pegawai {
            id: 1,
            nama: "Budi Santoso".to_string(),
            nik: "3175091201900001".to_string(),
            golongan: "IIIC".to_string(),
            status_keluarga: "Nikah".to_string(),
            jumlah_anak: 2,
            jabatan: "Lektor".to_string(),
            gaji_pokok: 4_000_000,
            tunjangan_keluarga: 400_000,
            tunjangan_anak: 320_000,
            tunjangan_jabatan: 700_000,
            gaji_bersih: 5_420_000,
            tanggal_input: chrono::NaiveDate::from_ymd_opt(2026, 8, 6)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn header_is_exact() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv,
            "Nama,NIK,Golongan,Status Keluarga,Jumlah Anak,Jabatan,Gaji Pokok,\
             Tunjangan Keluarga,Tunjangan Anak,Tunjangan Jabatan,Gaji Bersih"
        );
    }

    #[test]
    fn strings_quoted_numbers_bare() {
        let csv = to_csv(&[record()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"Budi Santoso\",\"3175091201900001\",\"IIIC\",\"Nikah\",2,\"Lektor\",\
             4000000,400000,320000,700000,5420000"
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut p = record();
        p.nama = "Budi \"Bud\" Santoso".to_string();
        let csv = to_csv(&[p]);
        assert!(csv.contains("\"Budi \"\"Bud\"\" Santoso\""));
    }
}
