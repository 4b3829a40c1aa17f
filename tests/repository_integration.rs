//! Integration tests for repository layer
//!
//! These tests verify that the repositories and unit of work correctly
//! interact with SQLite: staging, commit, lookups and request isolation.

use formula_api::domain::driver::Driver;
use formula_api::domain::repositories::{DriverRepository, GenericRepository, UnitOfWork};
use formula_api::infrastructure::database;
use formula_api::infrastructure::SqliteUnitOfWork;
use sqlx::SqlitePool;

/// Set up an in-memory database with the drivers table
async fn setup_test_db() -> SqlitePool {
    let pool = database::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open test database");
    database::ensure_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

/// Insert drivers through a unit of work and commit them
async fn seed_drivers(pool: &SqlitePool, drivers: Vec<Driver>) {
    let uow = SqliteUnitOfWork::begin(pool).await.expect("begin");
    for driver in drivers {
        uow.drivers().add(driver).await;
    }
    uow.complete().await.expect("Failed to seed drivers");
}

#[tokio::test]
async fn test_add_and_get_by_id() {
    let pool = setup_test_db().await;
    seed_drivers(&pool, vec![Driver::new("Max Verstappen", 1, "Red Bull")]).await;

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");
    let all = uow.drivers().all().await.expect("Failed to list drivers");
    assert_eq!(all.len(), 1);

    let found = uow
        .drivers()
        .get_by_id(all[0].id)
        .await
        .expect("Failed to find driver");

    assert!(found.is_some(), "Driver should be found");
    let found = found.unwrap();
    assert_eq!(found, all[0]);
    assert_eq!(found.name, "Max Verstappen");
    assert_eq!(found.driver_number, 1);
    assert_eq!(found.team, "Red Bull");
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let pool = setup_test_db().await;
    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");

    let found = uow.drivers().get_by_id(42).await.expect("query");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_ids_are_assigned_sequentially_by_store() {
    let pool = setup_test_db().await;
    seed_drivers(
        &pool,
        vec![
            Driver::new("Lando Norris", 4, "McLaren"),
            Driver::new("Oscar Piastri", 81, "McLaren"),
        ],
    )
    .await;

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");
    let ids: Vec<i64> = uow
        .drivers()
        .all()
        .await
        .expect("list")
        .iter()
        .map(|d| d.id)
        .collect();

    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_update_is_staged_until_complete() {
    let pool = setup_test_db().await;
    seed_drivers(&pool, vec![Driver::new("George Russell", 63, "Mercedes")]).await;

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");
    let mut driver = uow.drivers().all().await.expect("list").remove(0);
    driver.team = "Alpine".to_string();
    uow.drivers().update(driver.clone()).await;

    let before = uow.drivers().get_by_id(driver.id).await.expect("query").unwrap();
    assert_eq!(before.team, "Mercedes", "Update must not be visible before commit");

    assert_eq!(uow.complete().await.expect("commit"), 1);

    let after = uow.drivers().get_by_id(driver.id).await.expect("query").unwrap();
    assert_eq!(after.team, "Alpine");
    assert_eq!(after.id, driver.id);
}

#[tokio::test]
async fn test_delete_removes_driver() {
    let pool = setup_test_db().await;
    seed_drivers(
        &pool,
        vec![
            Driver::new("Pierre Gasly", 10, "Alpine"),
            Driver::new("Esteban Ocon", 31, "Haas"),
        ],
    )
    .await;

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");
    let gasly = uow.drivers().get_by_driver_number(10).await.expect("query").unwrap();
    uow.drivers().delete(gasly.clone()).await;
    uow.complete().await.expect("commit");

    let remaining = uow.drivers().all().await.expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Esteban Ocon");
    assert!(uow.drivers().get_by_id(gasly.id).await.expect("query").is_none());
}

#[tokio::test]
async fn test_get_by_driver_number() {
    let pool = setup_test_db().await;
    seed_drivers(
        &pool,
        vec![
            Driver::new("Sergio Perez", 11, "Red Bull"),
            Driver::new("Nico Hulkenberg", 27, "Sauber"),
            Driver::new("Reserve Driver", 11, "Red Bull"),
        ],
    )
    .await;

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");

    let found = uow.drivers().get_by_driver_number(27).await.expect("query");
    assert_eq!(found.unwrap().name, "Nico Hulkenberg");

    // Numbers are not unique; the earliest stored driver wins
    let found = uow.drivers().get_by_driver_number(11).await.expect("query");
    assert_eq!(found.unwrap().name, "Sergio Perez");

    let missing = uow.drivers().get_by_driver_number(99).await.expect("query");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_changes_across_operations_commit_together() {
    let pool = setup_test_db().await;
    seed_drivers(&pool, vec![Driver::new("Yuki Tsunoda", 22, "RB")]).await;

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");
    let tsunoda = uow.drivers().get_by_driver_number(22).await.expect("query").unwrap();
    uow.drivers().delete(tsunoda).await;
    uow.drivers().add(Driver::new("Liam Lawson", 30, "RB")).await;
    uow.drivers().add(Driver::new("Isack Hadjar", 6, "RB")).await;

    assert_eq!(uow.complete().await.expect("commit"), 3);
    drop(uow);

    let uow = SqliteUnitOfWork::begin(&pool).await.expect("begin");
    let names: Vec<String> = uow
        .drivers()
        .all()
        .await
        .expect("list")
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Liam Lawson", "Isack Hadjar"]);
}
