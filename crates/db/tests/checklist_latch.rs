//! Repository-level tests for checklist lazy creation and the idempotent
//! completion latch.

use sqlx::PgPool;

use broadway_core::checklist::{ChecklistKey, ItemStatus};
use broadway_db::models::user::CreateUser;
use broadway_db::repositories::{ChecklistRepo, UserRepo};

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: "Test".to_string(),
            role: "seller".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_or_create_is_lazy_and_stable(pool: PgPool) {
    let user_id = seed_user(&pool, "a@x.com").await;

    assert!(ChecklistRepo::find_by_user_id(&pool, user_id)
        .await
        .unwrap()
        .is_none());

    let first = ChecklistRepo::get_or_create(&pool, user_id).await.unwrap();
    assert_eq!(first.items.0.items().len(), 6);
    assert!(first
        .items
        .0
        .items()
        .iter()
        .all(|i| i.status == ItemStatus::Pending));

    // A second read returns the same row, not a fresh checklist.
    let second = ChecklistRepo::get_or_create(&pool, user_id).await.unwrap();
    assert_eq!(second.id, first.id);
}

/// The latch flips pending -> completed once and keeps the first timestamp.
#[sqlx::test(migrations = "./migrations")]
async fn test_complete_item_latches(pool: PgPool) {
    let user_id = seed_user(&pool, "a@x.com").await;
    ChecklistRepo::get_or_create(&pool, user_id).await.unwrap();

    let flipped = ChecklistRepo::complete_item(&pool, user_id, ChecklistKey::AddProduct)
        .await
        .unwrap();
    assert!(flipped);

    let row = ChecklistRepo::find_by_user_id(&pool, user_id)
        .await
        .unwrap()
        .unwrap();
    let first_completed_at = row.items.0.item(ChecklistKey::AddProduct).completed_at;
    assert!(first_completed_at.is_some());

    // Second trigger: no flip, timestamp untouched.
    let flipped = ChecklistRepo::complete_item(&pool, user_id, ChecklistKey::AddProduct)
        .await
        .unwrap();
    assert!(!flipped);

    let row = ChecklistRepo::find_by_user_id(&pool, user_id)
        .await
        .unwrap()
        .unwrap();
    let item = row.items.0.item(ChecklistKey::AddProduct);
    assert_eq!(item.status, ItemStatus::Completed);
    assert_eq!(item.completed_at, first_completed_at);
}

/// Completing for a user without a checklist is a silent no-op (the seller
/// has not been approved yet).
#[sqlx::test(migrations = "./migrations")]
async fn test_complete_item_without_checklist_is_noop(pool: PgPool) {
    let user_id = seed_user(&pool, "a@x.com").await;

    let flipped = ChecklistRepo::complete_item(&pool, user_id, ChecklistKey::AddAddress)
        .await
        .unwrap();
    assert!(!flipped);
    assert!(ChecklistRepo::find_by_user_id(&pool, user_id)
        .await
        .unwrap()
        .is_none());
}

/// The manual toggle can move an item both ways; completing clears through
/// the latch path never reverts it.
#[sqlx::test(migrations = "./migrations")]
async fn test_set_item_status_roundtrip(pool: PgPool) {
    let user_id = seed_user(&pool, "a@x.com").await;
    ChecklistRepo::get_or_create(&pool, user_id).await.unwrap();

    let row = ChecklistRepo::set_item_status(
        &pool,
        user_id,
        ChecklistKey::ReviewFees,
        ItemStatus::Completed,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(
        row.items.0.item(ChecklistKey::ReviewFees).status,
        ItemStatus::Completed
    );

    let row = ChecklistRepo::set_item_status(
        &pool,
        user_id,
        ChecklistKey::ReviewFees,
        ItemStatus::Pending,
    )
    .await
    .unwrap()
    .unwrap();
    let item = row.items.0.item(ChecklistKey::ReviewFees);
    assert_eq!(item.status, ItemStatus::Pending);
    assert!(item.completed_at.is_none());

    // The latch still works after a manual reset.
    let flipped = ChecklistRepo::complete_item(&pool, user_id, ChecklistKey::ReviewFees)
        .await
        .unwrap();
    assert!(flipped);
}
