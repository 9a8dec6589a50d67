use quiz_core::model::DifficultyLevel;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{GameResult, NewGameResult, ResultRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn i64_to_u32(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} out of range: {v}")))
}

fn difficulty_from_i64(v: i64) -> Result<DifficultyLevel, StorageError> {
    DifficultyLevel::ALL
        .into_iter()
        .find(|level| i64::from(level.value()) == v)
        .ok_or_else(|| StorageError::Serialization(format!("invalid difficulty: {v}")))
}

fn map_result_row(row: &sqlx::sqlite::SqliteRow) -> Result<GameResult, StorageError> {
    Ok(GameResult {
        id: row.try_get("id").map_err(ser)?,
        category: row.try_get("category").map_err(ser)?,
        difficulty: difficulty_from_i64(row.try_get::<i64, _>("difficulty").map_err(ser)?)?,
        score: i64_to_u32("score", row.try_get::<i64, _>("score").map_err(ser)?)?,
        total: i64_to_u32("total", row.try_get::<i64, _>("total").map_err(ser)?)?,
        seconds_per_question: i64_to_u32(
            "seconds_per_question",
            row.try_get::<i64, _>("seconds_per_question").map_err(ser)?,
        )?,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}

#[async_trait::async_trait]
impl ResultRepository for SqliteRepository {
    async fn append_result(&self, result: &NewGameResult) -> Result<i64, StorageError> {
        let res = sqlx::query(
            r"
                INSERT INTO game_results (
                    category, difficulty, score, total, seconds_per_question, created_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(&result.category)
        .bind(i64::from(result.difficulty.value()))
        .bind(i64::from(result.score))
        .bind(i64::from(result.total))
        .bind(i64::from(result.seconds_per_question))
        .bind(result.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(res.last_insert_rowid())
    }

    async fn get_result(&self, id: i64) -> Result<GameResult, StorageError> {
        let row = sqlx::query(
            r"
                SELECT id, category, difficulty, score, total, seconds_per_question, created_at
                FROM game_results
                WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => map_result_row(&row),
            None => Err(StorageError::NotFound),
        }
    }

    async fn recent_results(&self, limit: u32) -> Result<Vec<GameResult>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, category, difficulty, score, total, seconds_per_question, created_at
                FROM game_results
                ORDER BY created_at DESC, id DESC
                LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_result_row(&row)?);
        }
        Ok(out)
    }
}
