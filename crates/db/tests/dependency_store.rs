//! Integration tests for `SqlDependencyStore` against a real database.

use sqlx::PgPool;

use maintdesk_core::dependency::DependencyStore;
use maintdesk_db::models::company::CreateCompany;
use maintdesk_db::models::sector::CreateSector;
use maintdesk_db::repositories::{CompanyRepo, SectorRepo};
use maintdesk_db::SqlDependencyStore;

async fn company_with_sectors(pool: &PgPool, n: usize) -> i64 {
    let company = CompanyRepo::create(
        pool,
        &CreateCompany {
            name: "Counted".to_string(),
            legal_name: None,
            email: None,
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap();

    for i in 0..n {
        SectorRepo::create(
            pool,
            &CreateSector {
                company_id: company.id,
                name: format!("Sector {i}"),
                description: None,
            },
        )
        .await
        .unwrap();
    }

    company.id
}

#[sqlx::test]
async fn count_where_counts_referencing_rows(pool: PgPool) {
    let company_id = company_with_sectors(&pool, 3).await;
    let store = SqlDependencyStore::new(pool);

    let count = store
        .count_where("sectors", "company_id", company_id)
        .await
        .unwrap();
    assert_eq!(count, 3);

    let none = store.count_where("sectors", "company_id", 999_999).await.unwrap();
    assert_eq!(none, 0);
}

#[sqlx::test]
async fn select_where_pages_cover_all_rows(pool: PgPool) {
    let company_id = company_with_sectors(&pool, 5).await;
    let store = SqlDependencyStore::new(pool);

    let mut ids = Vec::new();
    for page in 0..3 {
        let (rows, total) = store
            .select_where("sectors", "company_id", company_id, 2, page * 2)
            .await
            .unwrap();
        assert_eq!(total, 5);
        ids.extend(rows.iter().map(|r| r["id"].as_i64().unwrap()));
    }

    assert_eq!(ids.len(), 5);
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 5, "pages must not overlap");
    assert_eq!(ids, sorted, "rows must come back in id order");
}

#[sqlx::test]
async fn unknown_table_is_refused(pool: PgPool) {
    let store = SqlDependencyStore::new(pool);
    let err = store.count_where("pg_tables", "schemaname", 1).await.unwrap_err();
    assert!(err.to_string().contains("unknown table"));
}

#[sqlx::test]
async fn malformed_column_is_refused(pool: PgPool) {
    let store = SqlDependencyStore::new(pool);
    let err = store
        .count_where("sectors", "company_id; DROP TABLE sectors", 1)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("malformed column"));
}
