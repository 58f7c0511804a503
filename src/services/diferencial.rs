use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::diferencial::Diferencial;

pub struct DiferencialService<'a> {
    db: &'a Database,
}

impl<'a> DiferencialService<'a> {
    pub fn new(db: &'a Database) -> Self {
        DiferencialService { db }
    }

    pub async fn list_by_obra(&self, obra_id: &str) -> AppResult<Vec<Diferencial>> {
        let diferenciais = sqlx::query_as::<_, Diferencial>(
            r#"
            SELECT id, obra_id, titulo
            FROM diferencial
            WHERE obra_id = $1
            ORDER BY titulo ASC
            "#,
        )
        .bind(obra_id)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(diferenciais)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Diferencial>> {
        let result = sqlx::query_as::<_, Diferencial>(
            r#"
            SELECT id, obra_id, titulo
            FROM diferencial
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn insert(&self, obra_id: &str, titulo: &str) -> AppResult<Diferencial> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO diferencial (id, obra_id, titulo)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&id)
        .bind(obra_id)
        .bind(titulo)
        .execute(&self.db.pool)
        .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create diferencial".to_string()))
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM diferencial WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
