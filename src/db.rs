use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Open the on-device database, creating the file and schema on first use.
pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    tracing::info!("Database opened (SQLite WAL)");
    Ok(pool)
}

/// Create the record table and its indexes. Safe to call any number of
/// times; the unique index on `nik` is what enforces NIK uniqueness.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pegawai (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nama TEXT NOT NULL,
            nik TEXT NOT NULL,
            golongan TEXT NOT NULL,
            status_keluarga TEXT NOT NULL,
            jumlah_anak INTEGER NOT NULL DEFAULT 0,
            jabatan TEXT NOT NULL,
            gaji_pokok INTEGER NOT NULL,
            tunjangan_keluarga INTEGER NOT NULL,
            tunjangan_anak INTEGER NOT NULL,
            tunjangan_jabatan INTEGER NOT NULL,
            gaji_bersih INTEGER NOT NULL,
            tanggal_input TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_pegawai_nik ON pegawai (nik)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_pegawai_nama ON pegawai (nama)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
    }
}
