use anyhow::Result;
use chrono::Utc;
use finax_bot::database::{connection::DatabaseManager, models::*};
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

fn slip(entry: &str, entry_size: &str, multiplier: i64) -> BetSlip {
    BetSlip {
        username: "alice".to_string(),
        user_id: 42,
        draw_id: 7,
        entry: entry.to_string(),
        bet_type_id: 3,
        multiplier,
        entry_size: entry_size.to_string(),
    }
}

#[tokio::test]
async fn test_insert_returns_generated_fields() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let recorded = BetEntry::insert(&db.pool, &slip("1234", "b", 5)).await.unwrap();

    assert!(recorded.id > 0);
    assert_eq!(recorded.entry, "1234");
    assert_eq!(recorded.entry_size, "b");
    assert_eq!(recorded.multiplier, 5);

    // added_on is generated by the store as current UTC time
    let age = Utc::now().naive_utc() - recorded.added_on;
    assert!(age.num_seconds().abs() < 60, "added_on too far from now: {}", recorded.added_on);

    Ok(())
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let first = BetEntry::insert(&db.pool, &slip("1111", "b", 1)).await.unwrap();
    let second = BetEntry::insert(&db.pool, &slip("2222", "s", 2)).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(second.entry, "2222");
    assert_eq!(second.entry_size, "s");

    Ok(())
}

#[tokio::test]
async fn test_all_slip_fields_are_persisted() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let recorded = BetEntry::insert(&db.pool, &slip("9876", "s", 10)).await.unwrap();

    // user_id, bet_type_id and draw_id are not in the RETURNING set; read
    // them back to confirm the insert carried them through unchanged.
    let (user_id, bet_type_id, draw_id): (i64, i64, i64) = sqlx::query_as(
        "SELECT user_id, bet_type_id, draw_id FROM bet_entries WHERE id = ?",
    )
    .bind(recorded.id)
    .fetch_one(&db.pool)
    .await?;

    assert_eq!(user_id, 42);
    assert_eq!(bet_type_id, 3);
    assert_eq!(draw_id, 7);

    Ok(())
}

#[tokio::test]
async fn test_entry_size_stored_verbatim() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    // Sizes outside {b, s} are accepted and stored as-is
    let recorded = BetEntry::insert(&db.pool, &slip("1234", "x", 1)).await.unwrap();
    assert_eq!(recorded.entry_size, "x");

    Ok(())
}

#[tokio::test]
async fn test_insert_fails_without_schema() -> Result<()> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("empty.db");
    let database_url = format!("sqlite:{}", db_path.display());

    // Connect without running migrations: the insert must surface a
    // storage error, never a partially populated entry.
    let db = DatabaseManager::new(&database_url).await?;
    let result = BetEntry::insert(&db.pool, &slip("1234", "b", 1)).await;

    assert!(matches!(result, Err(finax_bot::error::BotError::Storage(_))));

    Ok(())
}
