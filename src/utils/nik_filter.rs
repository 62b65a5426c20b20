use anyhow::{Result, anyhow};
use autoscale_cuckoo_filter::CuckooFilter;
use futures::StreamExt;
use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use std::sync::RwLock;

/// Expected capacity and false-positive rate.
/// The store holds tens to low thousands of records.
const FILTER_CAPACITY: usize = 10_000;
const FALSE_POSITIVE_RATE: f64 = 0.001;

static NIK_FILTER: Lazy<RwLock<CuckooFilter<String>>> =
    Lazy::new(|| RwLock::new(CuckooFilter::new(FILTER_CAPACITY, FALSE_POSITIVE_RATE)));

#[inline]
fn normalize(nik: &str) -> String {
    nik.to_lowercase()
}

/// Check if a NIK might be registered (false positives possible)
pub fn might_exist(nik: &str) -> bool {
    let nik = normalize(nik);
    NIK_FILTER
        .read()
        .expect("nik filter poisoned")
        .contains(&nik)
}

/// Insert a single NIK into the filter
pub fn insert(nik: &str) {
    let nik = normalize(nik);
    NIK_FILTER.write().expect("nik filter poisoned").add(&nik);
}

/// Remove a NIK from the filter after its record is deleted
pub fn remove(nik: &str) {
    let nik = normalize(nik);
    NIK_FILTER
        .write()
        .expect("nik filter poisoned")
        .remove(&nik);
}

/// Warm up the NIK filter using streaming + batching
pub async fn warmup_nik_filter(pool: &SqlitePool, batch_size: usize) -> Result<()> {
    let mut stream = sqlx::query_as::<_, (String,)>("SELECT nik FROM pegawai").fetch(pool);

    let mut batch = Vec::with_capacity(batch_size);
    let mut total = 0usize;

    while let Some(row) = stream.next().await {
        let (nik,) = row.map_err(|e| anyhow!("DB row fetch failed: {}", e))?;

        batch.push(normalize(&nik));
        total += 1;

        if batch.len() == batch_size {
            insert_batch(&batch);
            batch.clear();
        }
    }

    if !batch.is_empty() {
        insert_batch(&batch);
    }

    log::info!("NIK filter warmup complete: {} records", total);
    Ok(())
}

/// Insert a batch of normalized NIKs
fn insert_batch(niks: &[String]) {
    let mut filter = NIK_FILTER.write().expect("nik filter poisoned");

    for nik in niks {
        filter.add(nik);
    }
}
