use crate::Result as DbErrorResult;

use vb_core::Vouch;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct VouchRepository {
    pool: SqlitePool,
}

impl VouchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vouch: &Vouch) -> DbErrorResult<()> {
        let id = vouch.id.to_string();
        let created_at = vouch.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO vouches (id, user_id, stars, message, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&vouch.user_id)
        .bind(vouch.stars)
        .bind(&vouch.message)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Every stored vouch, oldest first. Rowid breaks same-second ties so
    /// the order always matches insertion order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Vouch>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, stars, message, created_at
              FROM vouches
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_vouch).collect())
    }

    /// Duplicate probe used by the file-to-table import.
    pub async fn exists(
        &self,
        user_id: &str,
        created_at: DateTime<Utc>,
        stars: i64,
    ) -> DbErrorResult<bool> {
        let ts = created_at.timestamp();

        let row = sqlx::query(
            r#"
              SELECT 1 AS present
              FROM vouches
              WHERE user_id = ? AND created_at = ? AND stars = ?
              LIMIT 1
              "#,
        )
        .bind(user_id)
        .bind(ts)
        .bind(stars)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM vouches")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("n"))
    }
}

fn row_to_vouch(row: &SqliteRow) -> Vouch {
    let id: String = row.get("id");
    let created_at: i64 = row.get("created_at");

    Vouch {
        id: Uuid::parse_str(&id).unwrap(),
        user_id: row.get("user_id"),
        stars: row.get("stars"),
        message: row.get("message"),
        created_at: DateTime::from_timestamp(created_at, 0).unwrap(),
    }
}
