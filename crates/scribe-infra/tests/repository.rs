//! Repository integration tests against an in-memory SQLite database.

use sea_orm::{ConnectOptions, Database, DbConn};
use sea_orm_migration::MigratorTrait;

use scribe_core::domain::{NewPost, NewUser};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};
use scribe_infra::database::migrations::Migrator;
use scribe_infra::{PgPostRepository, PgUserRepository};

async fn setup() -> DbConn {
    // A single pooled connection, otherwise each checkout would see a
    // fresh in-memory database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .to_owned();

    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_owned(),
        email: email.to_owned(),
    }
}

fn new_post(title: &str, content: &str) -> NewPost {
    NewPost {
        title: title.to_owned(),
        content: content.to_owned(),
    }
}

#[tokio::test]
async fn create_assigns_id_and_round_trips_fields() {
    let users = PgUserRepository::new(setup().await);

    let created = users.create(new_user("Ann", "ann@x.com")).await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Ann");
    assert_eq!(created.email, "ann@x.com");

    let found = users.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn duplicate_email_is_a_unique_violation() {
    let users = PgUserRepository::new(setup().await);

    let first = users.create(new_user("Ann", "ann@x.com")).await.unwrap();

    let err = users
        .create(new_user("Bob", "ann@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::UniqueViolation(_)));

    // The first row is intact and no partial row was left behind.
    let all = users.list(0, 10).await.unwrap();
    assert_eq!(all, vec![first]);
}

#[tokio::test]
async fn find_absent_user_is_none() {
    let users = PgUserRepository::new(setup().await);

    assert!(users.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_inserts_row_carrying_the_supplied_id() {
    let users = PgUserRepository::new(setup().await);

    let user = users
        .upsert(42, new_user("Ann", "ann@x.com"))
        .await
        .unwrap();
    assert_eq!(user.id, 42);

    let found = users.find_by_id(42).await.unwrap().unwrap();
    assert_eq!(found.name, "Ann");
}

#[tokio::test]
async fn upsert_updates_existing_row_in_place() {
    let users = PgUserRepository::new(setup().await);

    let created = users.create(new_user("Ann", "ann@x.com")).await.unwrap();

    let updated = users
        .upsert(created.id, new_user("Anne", "anne@x.com"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Anne");
    assert_eq!(updated.email, "anne@x.com");

    // Still a single row.
    assert_eq!(users.list(0, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_returns_row_then_absent() {
    let users = PgUserRepository::new(setup().await);

    let created = users.create(new_user("Ann", "ann@x.com")).await.unwrap();

    let deleted = users.delete(created.id).await.unwrap().unwrap();
    assert_eq!(deleted, created);

    assert!(users.find_by_id(created.id).await.unwrap().is_none());
    assert!(users.delete(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn list_respects_skip_and_limit() {
    let users = PgUserRepository::new(setup().await);

    for i in 1..=3 {
        users
            .create(new_user(&format!("User {i}"), &format!("u{i}@x.com")))
            .await
            .unwrap();
    }

    let page = users.list(1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 2);
}

#[tokio::test]
async fn post_create_requires_existing_owner() {
    let posts = PgPostRepository::new(setup().await);

    let err = posts.create(999, new_post("T", "C")).await.unwrap_err();
    assert!(matches!(err, RepoError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn post_update_of_absent_id_is_none() {
    let posts = PgPostRepository::new(setup().await);

    assert!(posts.update(999, new_post("T", "C")).await.unwrap().is_none());
}

#[tokio::test]
async fn post_update_replaces_title_and_content() {
    let db = setup().await;
    let users = PgUserRepository::new(db.clone());
    let posts = PgPostRepository::new(db);

    let owner = users.create(new_user("Ann", "ann@x.com")).await.unwrap();
    let created = posts.create(owner.id, new_post("T", "C")).await.unwrap();

    let updated = posts
        .update(created.id, new_post("T2", "C2"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "T2");
    assert_eq!(updated.content, "C2");
    assert_eq!(updated.owner_id, owner.id);
}

#[tokio::test]
async fn posts_filtered_by_owner() {
    let db = setup().await;
    let users = PgUserRepository::new(db.clone());
    let posts = PgPostRepository::new(db);

    let ann = users.create(new_user("Ann", "ann@x.com")).await.unwrap();
    let bob = users.create(new_user("Bob", "bob@x.com")).await.unwrap();

    posts.create(ann.id, new_post("A1", "..")).await.unwrap();
    posts.create(bob.id, new_post("B1", "..")).await.unwrap();
    posts.create(ann.id, new_post("A2", "..")).await.unwrap();

    let anns = posts.find_by_owner(ann.id).await.unwrap();
    assert_eq!(anns.len(), 2);
    assert!(anns.iter().all(|p| p.owner_id == ann.id));

    // Global list sees everything.
    assert_eq!(posts.list(0, 10).await.unwrap().len(), 3);
}

#[tokio::test]
async fn deleting_user_cascades_to_posts() {
    let db = setup().await;
    let users = PgUserRepository::new(db.clone());
    let posts = PgPostRepository::new(db);

    let ann = users.create(new_user("Ann", "ann@x.com")).await.unwrap();
    let post = posts.create(ann.id, new_post("T", "C")).await.unwrap();

    users.delete(ann.id).await.unwrap();

    assert!(posts.find_by_id(post.id).await.unwrap().is_none());
}
