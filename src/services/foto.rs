use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::foto::Foto;
use crate::utils::time::current_timestamp_seconds;

pub struct FotoService<'a> {
    db: &'a Database,
}

impl<'a> FotoService<'a> {
    pub fn new(db: &'a Database) -> Self {
        FotoService { db }
    }

    pub async fn list_by_obra(&self, obra_id: &str) -> AppResult<Vec<Foto>> {
        let fotos = sqlx::query_as::<_, Foto>(
            r#"
            SELECT id, obra_id, url, path, created_at
            FROM foto
            WHERE obra_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(obra_id)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(fotos)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Foto>> {
        let result = sqlx::query_as::<_, Foto>(
            r#"
            SELECT id, obra_id, url, path, created_at
            FROM foto
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn insert(&self, obra_id: &str, url: &str, path: &str) -> AppResult<Foto> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = current_timestamp_seconds();

        sqlx::query(
            r#"
            INSERT INTO foto (id, obra_id, url, path, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&id)
        .bind(obra_id)
        .bind(url)
        .bind(path)
        .bind(now)
        .execute(&self.db.pool)
        .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create foto".to_string()))
    }

    /// Removes the database row only; the stored object is kept.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM foto WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
