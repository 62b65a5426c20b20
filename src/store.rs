use sqlx::SqlitePool;
use thiserror::Error;

use crate::model::pegawai::{NewPegawai, Pegawai};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("NIK already registered: {0}")]
    DuplicateNik(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

const SELECT_COLUMNS: &str = "id, nama, nik, golongan, status_keluarga, jumlah_anak, jabatan, \
     gaji_pokok, tunjangan_keluarga, tunjangan_anak, tunjangan_jabatan, gaji_bersih, tanggal_input";

/// Insert a new record and return its assigned id.
///
/// Required fields are checked before any SQL runs; a NIK collision is
/// reported as `DuplicateNik` and leaves the store untouched. The unique
/// index is the authority, so two overlapping inserts of the same NIK
/// cannot both succeed.
pub async fn insert(pool: &SqlitePool, data: &NewPegawai) -> StoreResult<i64> {
    for (field, value) in [
        ("nama", &data.nama),
        ("nik", &data.nik),
        ("golongan", &data.golongan),
        ("status_keluarga", &data.status_keluarga),
        ("jabatan", &data.jabatan),
    ] {
        if value.trim().is_empty() {
            return Err(StoreError::Validation(format!(
                "{field} must not be empty"
            )));
        }
    }

    let result = sqlx::query(
        "INSERT INTO pegawai \
         (nama, nik, golongan, status_keluarga, jumlah_anak, jabatan, \
          gaji_pokok, tunjangan_keluarga, tunjangan_anak, tunjangan_jabatan, gaji_bersih, tanggal_input) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.nama)
    .bind(&data.nik)
    .bind(&data.golongan)
    .bind(&data.status_keluarga)
    .bind(data.jumlah_anak as i64)
    .bind(&data.jabatan)
    .bind(data.gaji_pokok)
    .bind(data.tunjangan_keluarga)
    .bind(data.tunjangan_anak)
    .bind(data.tunjangan_jabatan)
    .bind(data.gaji_bersih)
    .bind(data.tanggal_input)
    .execute(pool)
    .await;

    match result {
        Ok(res) => Ok(res.last_insert_rowid()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(StoreError::DuplicateNik(data.nik.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Every stored record, in insertion order.
pub async fn list_all(pool: &SqlitePool) -> StoreResult<Vec<Pegawai>> {
    let rows = sqlx::query_as::<_, Pegawai>(&format!(
        "SELECT {SELECT_COLUMNS} FROM pegawai ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<Pegawai>> {
    let row = sqlx::query_as::<_, Pegawai>(&format!(
        "SELECT {SELECT_COLUMNS} FROM pegawai WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Delete the record with the given id. Deleting an id that is not
/// present is a no-op, not an error; returns the number of rows removed.
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> StoreResult<u64> {
    let res = sqlx::query("DELETE FROM pegawai WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::ensure_schema;
    use crate::salary;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory pool with the production schema applied.
    pub(crate) async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    /// Build an insert payload the way the create handler does: compute
    /// the breakdown from the attributes and stamp the entry time.
    pub(crate) fn sample(nama: &str, nik: &str) -> NewPegawai {
        let breakdown = salary::calculate("IIIC", "Nikah", 2, "Lektor");
        NewPegawai {
            nama: nama.to_string(),
            nik: nik.to_string(),
            golongan: "IIIC".to_string(),
            status_keluarga: "Nikah".to_string(),
            jumlah_anak: 2,
            jabatan: "Lektor".to_string(),
            gaji_pokok: breakdown.gaji_pokok,
            tunjangan_keluarga: breakdown.tunjangan_keluarga,
            tunjangan_anak: breakdown.tunjangan_anak,
            tunjangan_jabatan: breakdown.tunjangan_jabatan,
            gaji_bersih: breakdown.gaji_bersih,
            tanggal_input: chrono::NaiveDate::from_ymd_opt(2026, 8, 6)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids() {
        let pool = test_pool().await;
        let a = insert(&pool, &sample("Budi", "111")).await.unwrap();
        let b = insert(&pool, &sample("Siti", "222")).await.unwrap();
        assert!(b > a);

        let stored = find_by_id(&pool, a).await.unwrap().unwrap();
        assert_eq!(stored.nama, "Budi");
        assert_eq!(stored.gaji_bersih, 5_420_000);
    }

    #[tokio::test]
    async fn duplicate_nik_is_rejected_and_store_unchanged() {
        let pool = test_pool().await;
        insert(&pool, &sample("Budi", "3175091201900001"))
            .await
            .unwrap();

        let err = insert(&pool, &sample("Siti", "3175091201900001"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateNik(nik) if nik == "3175091201900001"));

        let all = list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].nama, "Budi");
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected_before_write() {
        let pool = test_pool().await;

        let err = insert(&pool, &sample("Budi", "  ")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        let err = insert(&pool, &sample("", "333")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        assert!(list_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_a_noop() {
        let pool = test_pool().await;
        let removed = delete_by_id(&pool, 42).await.unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn list_reflects_inserts_and_deletes_in_order() {
        let pool = test_pool().await;
        let a = insert(&pool, &sample("Budi", "111")).await.unwrap();
        insert(&pool, &sample("Siti", "222")).await.unwrap();

        let removed = delete_by_id(&pool, a).await.unwrap();
        assert_eq!(removed, 1);

        let all = list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].nik, "222");
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let pool = test_pool().await;
        let a = insert(&pool, &sample("Budi", "111")).await.unwrap();
        delete_by_id(&pool, a).await.unwrap();
        let b = insert(&pool, &sample("Siti", "222")).await.unwrap();
        assert!(b > a);
    }
}
