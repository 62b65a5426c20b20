use sqlx::SqlitePool;

use crate::model::pegawai::Pegawai;
use crate::store::{self, StoreResult};

/// Records whose NIK contains the term, case-insensitively, in store order.
pub async fn find_by_nik(pool: &SqlitePool, term: &str) -> StoreResult<Vec<Pegawai>> {
    let term = term.to_lowercase();
    let rows = store::list_all(pool).await?;
    Ok(rows
        .into_iter()
        .filter(|p| p.nik.to_lowercase().contains(&term))
        .collect())
}

/// Records whose name contains the term, case-insensitively, in store order.
pub async fn find_by_nama(pool: &SqlitePool, term: &str) -> StoreResult<Vec<Pegawai>> {
    let term = term.to_lowercase();
    let rows = store::list_all(pool).await?;
    Ok(rows
        .into_iter()
        .filter(|p| p.nama.to_lowercase().contains(&term))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{sample, test_pool};

    #[tokio::test]
    async fn nik_search_is_substring_and_case_insensitive() {
        let pool = test_pool().await;
        store::insert(&pool, &sample("Budi", "A123X")).await.unwrap();
        store::insert(&pool, &sample("Siti", "B000")).await.unwrap();

        let hits = find_by_nik(&pool, "123").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nik, "A123X");

        let hits = find_by_nik(&pool, "a123").await.unwrap();
        assert_eq!(hits.len(), 1);

        assert!(find_by_nik(&pool, "999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn nama_search_preserves_store_order() {
        let pool = test_pool().await;
        store::insert(&pool, &sample("Budi Santoso", "111"))
            .await
            .unwrap();
        store::insert(&pool, &sample("Ani Lestari", "222"))
            .await
            .unwrap();
        store::insert(&pool, &sample("Budiman", "333")).await.unwrap();

        let hits = find_by_nama(&pool, "budi").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].nik, "111");
        assert_eq!(hits[1].nik, "333");
    }
}
