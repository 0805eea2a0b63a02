use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, Database,
    DatabaseConnection, DbBackend, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Schema,
};
use serde_json::json;
use toolhub_data::entities::prelude::*;
use toolhub_data::entities::{crypto_rates, file_jobs::JobStatus, visibility::Visibility};
use toolhub_data::{DataConfig, InsertValidator};

async fn setup_db() -> DatabaseConnection {
    toolhub_data::init();

    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);
    for stmt in [
        schema.create_table_from_entity(FileJobs),
        schema.create_table_from_entity(CryptoRates),
        schema.create_table_from_entity(Comments),
        schema.create_table_from_entity(SharedRegexPatterns),
    ] {
        db.execute(db.get_database_backend().build(&stmt))
            .await
            .unwrap();
    }
    db
}

fn validator() -> InsertValidator {
    InsertValidator::new(DataConfig::default()).unwrap()
}

#[tokio::test]
async fn test_file_job_insert_populates_defaults() {
    let db = setup_db().await;

    let job = validator()
        .file_job(&json!({
            "filename": "a.pdf",
            "fileType": "pdf",
            "conversionType": "to_text"
        }))
        .unwrap();
    let row = job.into_active_model().insert(&db).await.unwrap();

    assert!(!row.id.is_empty());
    assert_eq!(row.filename, "a.pdf");
    assert_eq!(row.file_type, "pdf");
    assert_eq!(row.conversion_type, "to_text");
    assert_eq!(row.status, JobStatus::Pending);
    assert_eq!(row.original_size, 0);
    assert_eq!(row.result_data, None);
    assert_eq!(row.error_message, None);
    assert_eq!(row.completed_at, None);

    // Supplied fields survive a read back unchanged.
    let fetched = FileJobs::find_by_id(&row.id).one(&db).await.unwrap().unwrap();
    assert_eq!(fetched, row);
}

#[tokio::test]
async fn test_worker_drives_job_to_terminal_status() {
    let db = setup_db().await;

    let job = validator()
        .file_job(&json!({
            "filename": "b.docx",
            "fileType": "docx",
            "conversionType": "to_pdf",
            "originalSize": 52_480
        }))
        .unwrap();
    let row = job.into_active_model().insert(&db).await.unwrap();
    assert_eq!(row.original_size, 52_480);

    // The worker service owns the pending -> processing -> completed walk;
    // the schema only has to persist it.
    let mut active = row.into_active_model();
    active.status = Set(JobStatus::Processing);
    let row = active.update(&db).await.unwrap();
    assert!(!row.status.is_terminal());

    let mut active = row.into_active_model();
    active.status = Set(JobStatus::Completed);
    active.result_data = Set(Some(json!({ "pages": 3 })));
    active.completed_at = Set(Some(Utc::now()));
    let row = active.update(&db).await.unwrap();

    assert!(row.status.is_terminal());
    assert_eq!(row.result_data, Some(json!({ "pages": 3 })));
    assert!(row.completed_at.is_some());
}

#[tokio::test]
async fn test_unknown_status_string_fails_decode() {
    let db = setup_db().await;

    // Rows written by older tooling could hold arbitrary status text; the
    // typed column rejects them at decode instead of passing them through.
    db.execute_unprepared(
        "INSERT INTO file_jobs \
         (id, filename, file_type, conversion_type, status, original_size, created_at) \
         VALUES ('j1', 'x.pdf', 'pdf', 'to_text', 'archived', 0, '2026-01-01 00:00:00')",
    )
    .await
    .unwrap();

    assert!(FileJobs::find_by_id("j1").one(&db).await.is_err());
}

#[tokio::test]
async fn test_comment_insert_populates_defaults() {
    let db = setup_db().await;

    let comment = validator()
        .comment(&json!({
            "authorName": "Bob",
            "content": "Great tool"
        }))
        .unwrap();
    let row = comment.into_active_model().insert(&db).await.unwrap();

    assert_eq!(row.author_name, "Bob");
    assert_eq!(row.content, "Great tool");
    assert_eq!(row.rating, 5);
    assert_eq!(row.is_published, Visibility::Public);
    assert_eq!(row.author_email, None);
    assert_eq!(row.tool_id, None);
}

#[tokio::test]
async fn test_regex_pattern_insert_populates_defaults() {
    let db = setup_db().await;

    let pattern = validator()
        .regex_pattern(&json!({
            "title": "Email",
            "pattern": "^[\\w.]+@[\\w.]+$",
            "authorName": "Ann"
        }))
        .unwrap();
    let row = pattern.into_active_model().insert(&db).await.unwrap();

    assert_eq!(row.flags, "g");
    assert_eq!(row.category, "general");
    assert_eq!(row.usage_count, 0);
    assert_eq!(row.likes, 0);
    assert_eq!(row.is_public, Visibility::Public);
    assert_eq!(row.tag_list(), Vec::<String>::new());
}

#[tokio::test]
async fn test_rate_history_reads_freshest_by_last_updated() {
    let db = setup_db().await;
    let v = validator();

    // Duplicate (from, to) pairs are allowed; the cache key is logical only.
    let stale = v
        .crypto_rate(&json!({
            "fromCurrency": "BTC",
            "toCurrency": "USD",
            "rate": "67000.1"
        }))
        .unwrap();
    let mut stale = stale.into_active_model();
    stale.last_updated = Set(Utc::now() - Duration::minutes(30));
    stale.insert(&db).await.unwrap();

    let fresh = v
        .crypto_rate(&json!({
            "fromCurrency": "BTC",
            "toCurrency": "USD",
            "rate": "67231.00000123"
        }))
        .unwrap();
    fresh.into_active_model().insert(&db).await.unwrap();

    let freshest = CryptoRates::find()
        .filter(crypto_rates::Column::FromCurrency.eq("BTC"))
        .filter(crypto_rates::Column::ToCurrency.eq("USD"))
        .order_by_desc(crypto_rates::Column::LastUpdated)
        .one(&db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(freshest.rate, "67231.00000123");
    assert_eq!(
        freshest.rate().unwrap().to_string(),
        "67231.00000123"
    );
    assert_eq!(freshest.market_data, json!({}));
}

#[tokio::test]
async fn test_rejected_payload_touches_nothing() {
    let db = setup_db().await;

    let err = validator()
        .comment(&json!({ "authorName": "Bob" }))
        .unwrap_err();
    assert!(err.names_field("content"));

    let count = Comments::find().all(&db).await.unwrap().len();
    assert_eq!(count, 0);
}
