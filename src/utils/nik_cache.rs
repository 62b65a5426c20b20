use anyhow::Result;
use futures_util::StreamExt;
use moka::future::Cache;
use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use std::time::Duration;

/// true  => NIK is TAKEN
/// false => NIK is AVAILABLE (usually we store only taken)
pub static NIK_CACHE: Lazy<Cache<String, bool>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(10_000)
        .time_to_live(Duration::from_secs(86400)) // 24h TTL
        .build()
});

/// Mark a single NIK as taken
pub async fn mark_taken(nik: &str) {
    NIK_CACHE.insert(nik.to_lowercase(), true).await;
}

/// Check if a NIK is taken
pub async fn is_taken(nik: &str) -> bool {
    NIK_CACHE.get(&nik.to_lowercase()).await.unwrap_or(false)
}

/// Forget a NIK after its record is deleted
pub async fn invalidate(nik: &str) {
    NIK_CACHE.invalidate(&nik.to_lowercase()).await;
}

/// Batch mark NIKs as taken
async fn batch_mark(niks: &[String]) {
    let futures: Vec<_> = niks
        .iter()
        .map(|n| NIK_CACHE.insert(n.to_lowercase(), true))
        .collect();

    // Await all insertions concurrently
    futures::future::join_all(futures).await;
}

/// Load only RECENTLY entered NIKs into the in-memory cache (batched)
pub async fn warmup_nik_cache(pool: &SqlitePool, days: u32, batch_size: usize) -> Result<()> {
    let mut stream = sqlx::query_as::<_, (String,)>(
        r#"
        SELECT nik
        FROM pegawai
        WHERE tanggal_input >= datetime('now', '-' || ? || ' days')
        ORDER BY tanggal_input DESC
        "#,
    )
    .bind(days)
    .fetch(pool);

    let mut batch = Vec::with_capacity(batch_size);
    let mut total_count = 0usize;

    while let Some(row) = stream.next().await {
        let (nik,) = row?;
        batch.push(nik);
        total_count += 1;

        if batch.len() >= batch_size {
            batch_mark(&batch).await;
            batch.clear();
        }
    }

    // Insert any remaining NIKs
    if !batch.is_empty() {
        batch_mark(&batch).await;
    }

    log::info!(
        "NIK cache warmup complete: {} recent records (last {} days)",
        total_count,
        days
    );

    Ok(())
}
