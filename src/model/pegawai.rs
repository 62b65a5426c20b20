use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "nama": "Budi Santoso",
        "nik": "3175091201900001",
        "golongan": "IIIC",
        "status_keluarga": "Nikah",
        "jumlah_anak": 2,
        "jabatan": "Lektor",
        "gaji_pokok": 4_000_000,
        "tunjangan_keluarga": 400_000,
        "tunjangan_anak": 320_000,
        "tunjangan_jabatan": 700_000,
        "gaji_bersih": 5_420_000,
        "tanggal_input": "2026-08-06T09:30:00"
    })
)]
pub struct Pegawai {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Budi Santoso")]
    pub nama: String,

    #[schema(example = "3175091201900001")]
    pub nik: String,

    #[schema(example = "IIIC")]
    pub golongan: String,

    #[schema(example = "Nikah")]
    pub status_keluarga: String,

    #[schema(example = 2)]
    pub jumlah_anak: i64,

    #[schema(example = "Lektor")]
    pub jabatan: String,

    #[schema(example = 4_000_000)]
    pub gaji_pokok: i64,

    #[schema(example = 400_000)]
    pub tunjangan_keluarga: i64,

    #[schema(example = 320_000)]
    pub tunjangan_anak: i64,

    #[schema(example = 700_000)]
    pub tunjangan_jabatan: i64,

    #[schema(example = 5_420_000)]
    pub gaji_bersih: i64,

    #[schema(
        example = "2026-08-06T09:30:00",
        value_type = String,
        format = "date-time"
    )]
    pub tanggal_input: NaiveDateTime,
}

/// Insert payload: a record before the store has assigned an id.
#[derive(Debug, Clone)]
pub struct NewPegawai {
    pub nama: String,
    pub nik: String,
    pub golongan: String,
    pub status_keluarga: String,
    pub jumlah_anak: u32,
    pub jabatan: String,
    pub gaji_pokok: i64,
    pub tunjangan_keluarga: i64,
    pub tunjangan_anak: i64,
    pub tunjangan_jabatan: i64,
    pub gaji_bersih: i64,
    pub tanggal_input: NaiveDateTime,
}
