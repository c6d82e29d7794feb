//! Repository tests against an in-memory SQLite database.
//!
//! Each test builds its own single-connection `sqlite::memory:` pool and runs
//! the real migrations, so nothing is shared between tests.

use crate::{
    DbError, DbPool,
    pool::{create_pool, run_migrations},
    repository::{bags, clubs},
};

async fn fresh_pool() -> DbPool {
    let pool = create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool should open");
    run_migrations(&pool).await.expect("migrations should apply");
    pool
}

// ============================================================
// bags
// ============================================================

#[tokio::test]
async fn inserted_bag_is_immediately_listed() {
    let pool = fresh_pool().await;

    let john = bags::insert_bag(&pool, "John", 4).await.unwrap();
    let mark = bags::insert_bag(&pool, "Mark", 7).await.unwrap();

    assert_ne!(john.id, mark.id);
    assert_eq!(john.player, "John");
    assert_eq!(john.capacity, 4);

    let listed = bags::list_bags(&pool).await.unwrap();
    assert_eq!(listed, vec![john, mark]);
}

#[tokio::test]
async fn get_unknown_bag_is_not_found() {
    let pool = fresh_pool().await;
    let result = bags::get_bag(&pool, 42).await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[tokio::test]
async fn delete_removes_only_the_target_bag() {
    let pool = fresh_pool().await;
    let john = bags::insert_bag(&pool, "John", 4).await.unwrap();
    let lucy = bags::insert_bag(&pool, "Lucy", 3).await.unwrap();

    bags::delete_bag(&pool, john.id).await.unwrap();

    let listed = bags::list_bags(&pool).await.unwrap();
    assert_eq!(listed, vec![lucy]);
    assert!(matches!(bags::get_bag(&pool, john.id).await, Err(DbError::NotFound)));
}

#[tokio::test]
async fn delete_unknown_bag_is_not_found() {
    let pool = fresh_pool().await;
    let result = bags::delete_bag(&pool, 7).await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let pool = fresh_pool().await;
    let first = bags::insert_bag(&pool, "John", 4).await.unwrap();
    bags::delete_bag(&pool, first.id).await.unwrap();

    let second = bags::insert_bag(&pool, "Mark", 7).await.unwrap();
    assert!(second.id > first.id);
}

// ============================================================
// clubs
// ============================================================

#[tokio::test]
async fn clubs_are_listed_in_insertion_order_per_bag() {
    let pool = fresh_pool().await;
    let john = bags::insert_bag(&pool, "John", 9).await.unwrap();
    let mark = bags::insert_bag(&pool, "Mark", 7).await.unwrap();

    clubs::insert_club(&pool, john.id, "driver").await.unwrap();
    clubs::insert_club(&pool, mark.id, "putter").await.unwrap();
    clubs::insert_club(&pool, john.id, "five iron").await.unwrap();

    let names: Vec<String> = clubs::list_clubs_for_bag(&pool, john.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["driver", "five iron"]);
}

#[tokio::test]
async fn insert_club_into_unknown_bag_is_not_found() {
    let pool = fresh_pool().await;
    let result = clubs::insert_club(&pool, 99, "wedge").await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[tokio::test]
async fn deleting_a_bag_cascades_to_its_clubs() {
    let pool = fresh_pool().await;
    let john = bags::insert_bag(&pool, "John", 9).await.unwrap();
    let lucy = bags::insert_bag(&pool, "Lucy", 3).await.unwrap();
    clubs::insert_club(&pool, john.id, "driver").await.unwrap();
    clubs::insert_club(&pool, lucy.id, "putter").await.unwrap();

    bags::delete_bag(&pool, john.id).await.unwrap();

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clubs WHERE bag_id = ?1")
        .bind(john.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);

    // Other bags keep their clubs.
    assert_eq!(clubs::list_clubs_for_bag(&pool, lucy.id).await.unwrap().len(), 1);
}
