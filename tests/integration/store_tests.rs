//! Store integration tests
//!
//! Each test works in a throwaway schema on the server named by
//! `BOOKKEEP_TEST_DATABASE_URL`.
//! Run with: cargo test -- --ignored

use std::io::Cursor;
use std::time::{SystemTime, UNIX_EPOCH};

use bookkeep::{
    config::LoansConfig,
    console::Console,
    menu,
    models::TableSpec,
    repository::{LibraryStore, Repository},
    services, AppError,
};
use chrono::{TimeZone, Utc};
use sqlx::{Connection, Executor, PgConnection};

const SCHEMA_SQL: &str = include_str!("../../schema/bookkeep.sql");

const CATEGORIES: TableSpec = TableSpec {
    name: "categories",
    columns: &["id", "name"],
};

const USERS: TableSpec = TableSpec {
    name: "users",
    columns: &["id", "name"],
};

struct TestDb {
    admin: PgConnection,
    schema: String,
}

impl TestDb {
    /// Create an empty schema with the library tables and a repository bound to it
    async fn setup() -> (TestDb, Repository) {
        let url = std::env::var("BOOKKEEP_TEST_DATABASE_URL")
            .expect("BOOKKEEP_TEST_DATABASE_URL must be set");
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let schema = format!("bookkeep_test_{}_{}", std::process::id(), nanos);

        let mut admin = PgConnection::connect(&url).await.expect("Failed to connect");
        admin
            .execute(format!("CREATE SCHEMA {schema}").as_str())
            .await
            .expect("Failed to create schema");
        admin
            .execute(format!("SET search_path TO {schema}").as_str())
            .await
            .unwrap();
        admin.execute(SCHEMA_SQL).await.expect("Failed to create tables");

        let mut conn = PgConnection::connect(&url).await.expect("Failed to connect");
        conn.execute(format!("SET search_path TO {schema}").as_str())
            .await
            .unwrap();

        (TestDb { admin, schema }, Repository::new(conn))
    }

    async fn count(&mut self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&mut self.admin)
            .await
            .unwrap()
    }

    async fn teardown(mut self, repository: Repository) {
        repository.close().await.unwrap();
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("Failed to drop schema");
    }
}

#[tokio::test]
#[ignore]
async fn test_seed_twice_yields_one_set() {
    let (mut db, mut repo) = TestDb::setup().await;

    let first = services::seed_reference_data(&mut repo).await.unwrap();
    assert_eq!(first.books.len(), 5);

    let second = services::seed_reference_data(&mut repo).await.unwrap();
    assert!(second.is_empty());

    assert_eq!(db.count("authors").await, 5);
    assert_eq!(db.count("categories").await, 3);
    assert_eq!(db.count("books").await, 5);

    let linked: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM books b
        JOIN authors a ON a.id = b.author_id
        JOIN categories c ON c.id = b.category_id
        "#,
    )
    .fetch_one(&mut db.admin)
    .await
    .unwrap();
    assert_eq!(linked, 5);

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_show_table_matches_store() {
    let (mut db, mut repo) = TestDb::setup().await;
    services::seed_reference_data(&mut repo).await.unwrap();

    let view = services::show_table(&mut repo, &TableSpec::AUTHORS).await.unwrap();
    assert_eq!(view.rows.len() as i64, db.count("authors").await);
    assert_eq!(
        view.rows[0],
        vec![Some("1".to_string()), Some("George Orwell".to_string())]
    );

    let view = services::show_table(&mut repo, &CATEGORIES).await.unwrap();
    let names: Vec<_> = view.rows.iter().map(|r| r[1].clone().unwrap()).collect();
    assert_eq!(names, vec!["Dystopian", "Magical Realism", "Fantasy"]);

    let view = services::show_table(&mut repo, &TableSpec::LOANS).await.unwrap();
    assert!(view.rows.is_empty());

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_show_missing_table_is_recoverable() {
    let (db, mut repo) = TestDb::setup().await;

    let missing = TableSpec {
        name: "members",
        columns: &["id"],
    };
    let err = services::show_table(&mut repo, &missing).await.unwrap_err();
    assert!(matches!(err, AppError::ShowTable { .. }));
    assert!(!err.is_fatal());

    // The session is still usable afterwards
    assert_eq!(repo.count_authors().await.unwrap(), 0);

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_add_user_gets_fresh_id() {
    let (mut db, mut repo) = TestDb::setup().await;

    let bob = services::add_user(&mut repo, "Bob").await.unwrap();
    let alice = services::add_user(&mut repo, "Alice Smith").await.unwrap();
    assert_ne!(alice.id, bob.id);
    assert_eq!(alice.name, "Alice Smith");

    let named: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE name = $1")
        .bind("Alice Smith")
        .fetch_one(&mut db.admin)
        .await
        .unwrap();
    assert_eq!(named, 1);

    let view = services::show_table(&mut repo, &USERS).await.unwrap();
    assert_eq!(view.rows.len(), 2);

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_register_loan_on_fixed_date() {
    let (db, mut repo) = TestDb::setup().await;
    services::seed_reference_data(&mut repo).await.unwrap();
    let user = services::add_user(&mut repo, "Alice Smith").await.unwrap();
    assert_eq!(user.id, 1);

    let now = Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap();
    services::register_loan(&mut repo, 1, 1, now, 30).await.unwrap();

    let view = services::show_table(&mut repo, &TableSpec::LOANS).await.unwrap();
    assert_eq!(view.rows.len(), 1);
    let row: Vec<_> = view.rows[0].iter().map(|v| v.clone().unwrap()).collect();
    assert_eq!(row, vec!["1", "1", "1", "2024-01-15", "2024-02-14"]);

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_register_loan_for_missing_book_is_recoverable() {
    let (mut db, mut repo) = TestDb::setup().await;
    services::add_user(&mut repo, "Alice Smith").await.unwrap();

    let err = services::register_loan(&mut repo, 1, 42, Utc::now(), 30)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::RegisterLoan {
            user_id: 1,
            book_id: 42,
            ..
        }
    ));
    assert_eq!(db.count("loans").await, 0);

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_invalid_menu_choices_leave_store_untouched() {
    let (mut db, mut repo) = TestDb::setup().await;
    services::seed_reference_data(&mut repo).await.unwrap();

    let mut console = Console::new(Cursor::new("0\n\n99\n\n6\n"), Vec::new());
    menu::run(&mut repo, &mut console, &LoansConfig::default())
        .await
        .unwrap();

    assert_eq!(db.count("authors").await, 5);
    assert_eq!(db.count("books").await, 5);
    assert_eq!(db.count("users").await, 0);
    assert_eq!(db.count("loans").await, 0);

    db.teardown(repo).await;
}

#[tokio::test]
#[ignore]
async fn test_menu_registers_user_and_loan() {
    let (mut db, mut repo) = TestDb::setup().await;
    services::seed_reference_data(&mut repo).await.unwrap();

    let input = "3\nAlice Smith\n\n4\n1\n2\n\n5\n\n6\n";
    let mut console = Console::new(Cursor::new(input), Vec::new());
    menu::run(&mut repo, &mut console, &LoansConfig::default())
        .await
        .unwrap();

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("User 'Alice Smith' added successfully!"));
    assert!(output.contains("Loan registered successfully!"));
    assert!(output.contains("loans\n------------------------\nid: 1\nuser_id: 1\nbook_id: 2\n"));
    assert_eq!(db.count("loans").await, 1);

    db.teardown(repo).await;
}
