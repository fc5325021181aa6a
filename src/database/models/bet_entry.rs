use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::BotError;
use crate::utils::logging::{log_database_error, log_database_operation};

/// A parsed bet message, ready to be persisted. Built by the parser per
/// incoming message and dropped after the reply is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetSlip {
    pub username: String,
    pub user_id: i64,
    pub draw_id: i64,
    /// The bet combination, stored verbatim.
    pub entry: String,
    pub bet_type_id: i64,
    pub multiplier: i64,
    /// Nominally "b" or "s". Not validated here; display pricing treats any
    /// value other than "b" as the small tier.
    pub entry_size: String,
}

/// A recorded bet entry as returned by the store. `id` and `added_on` are
/// generated by the database; the remaining fields echo the insert.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BetEntry {
    pub id: i64,
    pub entry: String,
    pub entry_size: String,
    pub multiplier: i64,
    pub added_on: NaiveDateTime,
}

const INSERT_BET_ENTRY: &str = "\
    INSERT INTO bet_entries (entry, entry_size, multiplier, user_id, bet_type_id, draw_id) \
    VALUES (?, ?, ?, ?, ?, ?) \
    RETURNING id, entry, entry_size, multiplier, added_on";

impl BetEntry {
    /// Inserts a bet slip and reads back the generated fields in the same
    /// round trip. The RETURNING row is decoded by column name, so a query
    /// or schema change that drops a column fails loudly instead of
    /// misassigning fields.
    pub async fn insert(pool: &SqlitePool, slip: &BetSlip) -> Result<Self, BotError> {
        log_database_operation(
            "INSERT",
            "bet_entries",
            Some(&format!("draw {} user {}", slip.draw_id, slip.user_id)),
        );

        let row = sqlx::query_as::<_, BetEntry>(INSERT_BET_ENTRY)
            .bind(&slip.entry)
            .bind(&slip.entry_size)
            .bind(slip.multiplier)
            .bind(slip.user_id)
            .bind(slip.bet_type_id)
            .bind(slip.draw_id)
            .fetch_optional(pool)
            .await
            .map_err(|err| {
                log_database_error("INSERT", "bet_entries", &err.to_string());
                BotError::Storage(err)
            })?;

        // A RETURNING insert always yields a row; its absence means the
        // schema and query disagree, which is a hard failure.
        row.ok_or_else(|| {
            log_database_error("INSERT", "bet_entries", "no row returned");
            BotError::Storage(sqlx::Error::RowNotFound)
        })
    }
}
