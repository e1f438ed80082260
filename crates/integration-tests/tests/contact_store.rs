//! ContactService against a real SQLite pool
//!
//! Covers the reference scenario and the connection release invariant.

use std::sync::Arc;
use std::time::Duration;

use contact_rpc_core::application::{CallContext, ContactService};
use contact_rpc_core::domain::Contact;
use contact_rpc_core::port::PoolError;
use contact_rpc_core::AppError;
use contact_rpc_infra_sqlite::{
    create_pool, demo_contacts, insert_contacts, run_migrations, seed_demo_contacts,
    PoolSettings, SqliteConnectionPool,
};

async fn setup(settings: PoolSettings) -> SqliteConnectionPool {
    let pool = create_pool("sqlite::memory:", &settings).await.unwrap();
    run_migrations(&pool).await.unwrap();
    SqliteConnectionPool::new(pool)
}

fn ctx() -> CallContext {
    CallContext::new(uuid::Uuid::new_v4().to_string()).with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_reference_scenario() {
    let pool = setup(PoolSettings::default()).await;
    insert_contacts(pool.inner(), &demo_contacts()).await.unwrap();
    let service = ContactService::new(Arc::new(pool.clone()));

    let all = service.read_all(&ctx(), "v1").await.unwrap();
    assert_eq!(
        all,
        vec![
            Contact::new(1, "julien", "regnault", "Singapore"),
            Contact::new(2, "marc", "jeandau", "Geneva"),
        ]
    );

    let one = service.read(&ctx(), "v1", 1).await.unwrap();
    assert_eq!(one.firstname, "julien");

    let err = service.read(&ctx(), "v1", 3).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 3 }));
    assert_eq!(err.to_string(), "contact with ID='3' is not found");

    let err = service.read(&ctx(), "v2", 1).await.unwrap_err();
    assert!(matches!(err, AppError::Unimplemented { .. }));

    assert_eq!(pool.leased(), 0);
}

#[tokio::test]
async fn test_empty_store() {
    let pool = setup(PoolSettings::default()).await;
    let service = ContactService::new(Arc::new(pool.clone()));

    assert!(service.read_all(&ctx(), "").await.unwrap().is_empty());
    assert!(matches!(
        service.read(&ctx(), "", 1).await,
        Err(AppError::NotFound { id: 1 })
    ));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let pool = setup(PoolSettings::default()).await;
    assert_eq!(seed_demo_contacts(pool.inner()).await.unwrap(), 2);
    assert_eq!(seed_demo_contacts(pool.inner()).await.unwrap(), 0);

    let service = ContactService::new(Arc::new(pool));
    assert_eq!(service.read_all(&ctx(), "v1").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_release_on_every_path() {
    let pool = setup(PoolSettings {
        max_connections: 2,
        acquire_timeout: Duration::from_millis(500),
    })
    .await;
    insert_contacts(pool.inner(), &demo_contacts()).await.unwrap();
    let service = ContactService::new(Arc::new(pool.clone()));

    // With only two connections, a leak would starve later calls
    for _ in 0..20 {
        let _ = service.read(&ctx(), "v1", 1).await.unwrap();
        let _ = service.read(&ctx(), "v1", 42).await.unwrap_err();
        let _ = service.read_all(&ctx(), "v1").await.unwrap();
        let _ = service.read_all(&ctx(), "v9").await.unwrap_err();
    }
    assert_eq!(pool.leased(), 0);

    sqlx::query("DROP TABLE Contacts")
        .execute(pool.inner())
        .await
        .unwrap();
    let err = service.read_all(&ctx(), "v1").await.unwrap_err();
    assert!(matches!(err, AppError::Unknown { .. }));
    assert_eq!(pool.leased(), 0);
}

#[tokio::test]
async fn test_concurrent_reads() {
    let pool = setup(PoolSettings {
        max_connections: 4,
        acquire_timeout: Duration::from_secs(5),
    })
    .await;
    insert_contacts(pool.inner(), &demo_contacts()).await.unwrap();
    let service = Arc::new(ContactService::new(Arc::new(pool.clone())));

    let mut handles = vec![];
    for i in 0..50 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.read(&ctx(), "v1", (i % 3) + 1).await
        }));
    }

    let mut found = 0;
    let mut missing = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => found += 1,
            Err(AppError::NotFound { .. }) => missing += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(found + missing, 50);
    assert_eq!(missing, 16);
    assert_eq!(pool.leased(), 0);
}

#[tokio::test]
async fn test_exhausted_pool_is_unavailable() {
    let pool = setup(PoolSettings {
        max_connections: 1,
        acquire_timeout: Duration::from_millis(100),
    })
    .await;
    let service = ContactService::new(Arc::new(pool.clone()));

    let held = pool.inner().acquire().await.unwrap();
    let err = service.read_all(&ctx(), "v1").await.unwrap_err();
    assert!(matches!(err, AppError::Unavailable(PoolError::Timeout)));
    assert!(err.is_retryable());

    drop(held);
    assert!(service.read_all(&ctx(), "v1").await.is_ok());
}

#[tokio::test]
async fn test_deadline_shorter_than_pool_wait() {
    let pool = setup(PoolSettings {
        max_connections: 1,
        acquire_timeout: Duration::from_secs(10),
    })
    .await;
    let service = ContactService::new(Arc::new(pool.clone()));

    let _held = pool.inner().acquire().await.unwrap();
    let ctx = CallContext::new("deadline").with_timeout(Duration::from_millis(100));

    let err = service.read(&ctx, "v1", 1).await.unwrap_err();
    assert!(matches!(err, AppError::DeadlineExceeded));
    assert_eq!(pool.leased(), 0);
}

#[tokio::test]
async fn test_file_backed_store_survives_reopen() {
    let path = std::env::temp_dir().join(format!("contact-rpc-{}.db", uuid::Uuid::new_v4()));
    let url = path.to_string_lossy().into_owned();

    {
        let pool = create_pool(&url, &PoolSettings::default()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        seed_demo_contacts(&pool).await.unwrap();
        pool.close().await;
    }

    let pool = create_pool(&url, &PoolSettings::default()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let service = ContactService::new(Arc::new(SqliteConnectionPool::new(pool.clone())));
    let contact = service.read(&ctx(), "v1", 2).await.unwrap();
    assert_eq!(contact.address, "Geneva");

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}
