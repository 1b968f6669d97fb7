//! Integration tests for the dog and breed repositories against SQLite.

use assert_matches::assert_matches;
use shelter_core::dog::{DogListFilter, DogStatus};
use shelter_db::models::dog::DogSummary;
use shelter_db::repositories::{BreedRepo, DogRepo};
use shelter_db::TableCounts;
use sqlx::SqlitePool;

fn ids(dogs: &[DogSummary]) -> Vec<i64> {
    dogs.iter().map(|d| d.id).collect()
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check_on_empty_schema(pool: SqlitePool) {
    shelter_db::health_check(&pool).await.unwrap();

    let dogs = DogRepo::list(&pool, &DogListFilter::default()).await.unwrap();
    assert!(dogs.is_empty());
    assert!(BreedRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_table_counts(pool: SqlitePool) {
    let counts = shelter_db::table_counts(&pool).await.unwrap();

    assert_eq!(counts, TableCounts { breeds: 3, dogs: 7 });
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_list_without_filters_returns_all_ordered_by_id(pool: SqlitePool) {
    let dogs = DogRepo::list(&pool, &DogListFilter::default()).await.unwrap();

    assert_eq!(ids(&dogs), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(dogs[0].name, "Max");
    assert_eq!(dogs[0].breed, "Labrador Retriever");
    assert_eq!(dogs[1].breed, "German Shepherd");
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_list_available_only(pool: SqlitePool) {
    let filter = DogListFilter::from_params(Some("available"), None);
    let dogs = DogRepo::list(&pool, &filter).await.unwrap();

    assert_eq!(ids(&dogs), vec![1, 3, 5, 7]);
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_unrecognised_status_is_ignored(pool: SqlitePool) {
    let filter = DogListFilter::from_params(Some("adopted"), None);
    let dogs = DogRepo::list(&pool, &filter).await.unwrap();

    assert_eq!(dogs.len(), 7);
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_name_filter_is_case_insensitive_substring(pool: SqlitePool) {
    let filter = DogListFilter::from_params(None, Some("ax"));
    let dogs = DogRepo::list(&pool, &filter).await.unwrap();

    let names: Vec<&str> = dogs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Max", "MAXINE", "Relax", "Daxter"]);
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_status_and_name_filters_intersect(pool: SqlitePool) {
    let filter = DogListFilter::from_params(Some("available"), Some("AX"));
    let dogs = DogRepo::list(&pool, &filter).await.unwrap();

    assert_eq!(ids(&dogs), vec![1, 3]);
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_name_wildcards_match_literally(pool: SqlitePool) {
    let filter = DogListFilter::from_params(None, Some("_"));
    let dogs = DogRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(ids(&dogs), vec![7]);

    let filter = DogListFilter::from_params(None, Some("%"));
    let dogs = DogRepo::list(&pool, &filter).await.unwrap();
    assert!(dogs.is_empty());
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_dog_with_missing_breed_is_excluded(pool: SqlitePool) {
    // Foreign key enforcement is per-connection; bypass it to plant an orphan.
    let mut conn = pool.acquire().await.unwrap();
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&mut *conn)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO dogs (id, name, breed_id, age, gender, description, status) \
         VALUES (8, 'Ghost', 99, 4, 'Male', 'No breed on file.', 'AVAILABLE')",
    )
    .execute(&mut *conn)
    .await
    .unwrap();
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await
        .unwrap();
    drop(conn);

    let dogs = DogRepo::list(&pool, &DogListFilter::default()).await.unwrap();
    assert!(!ids(&dogs).contains(&8));

    let found = DogRepo::find_detail(&pool, 8).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_find_detail_returns_joined_record(pool: SqlitePool) {
    let dog = DogRepo::find_detail(&pool, 2).await.unwrap();

    assert_matches!(&dog, Some(d) if d.name == "Bella" && d.status == DogStatus::Pending);
    let dog = dog.unwrap();
    assert_eq!(dog.breed, "German Shepherd");
    assert_eq!(dog.age, 5);
    assert_eq!(dog.gender, "Female");
    assert_eq!(dog.description, "Calm and great with kids.");
}

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_find_detail_missing_returns_none(pool: SqlitePool) {
    let dog = DogRepo::find_detail(&pool, 9_999_999).await.unwrap();
    assert!(dog.is_none());
}

// ---------------------------------------------------------------------------
// Breeds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("shelter"))]
async fn test_list_breeds(pool: SqlitePool) {
    let breeds = BreedRepo::list(&pool).await.unwrap();

    let names: Vec<&str> = breeds.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Labrador Retriever", "German Shepherd", "Beagle"]);
    assert_eq!(breeds[2].id, 3);
}
