use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::obra::{BannerKind, Obra};

pub struct ObraService<'a> {
    db: &'a Database,
}

impl<'a> ObraService<'a> {
    pub fn new(db: &'a Database) -> Self {
        ObraService { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Obra>> {
        let obras = sqlx::query_as::<_, Obra>(
            r#"
            SELECT id, nome, slug, descricao, banner, banner_real, concluida, created_at
            FROM obra
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db.pool)
        .await?;

        Ok(obras)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Obra>> {
        let result = sqlx::query_as::<_, Obra>(
            r#"
            SELECT id, nome, slug, descricao, banner, banner_real, concluida, created_at
            FROM obra
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Obra>> {
        let result = sqlx::query_as::<_, Obra>(
            r#"
            SELECT id, nome, slug, descricao, banner, banner_real, concluida, created_at
            FROM obra
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn set_concluida(&self, id: &str, concluida: bool) -> AppResult<Obra> {
        sqlx::query("UPDATE obra SET concluida = $1 WHERE id = $2")
            .bind(concluida)
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Obra not found".to_string()))
    }

    pub async fn set_banner(&self, id: &str, kind: BannerKind, url: &str) -> AppResult<Obra> {
        // column name comes from the BannerKind enum, never from user input
        let query = format!("UPDATE obra SET {} = $1 WHERE id = $2", kind.column());

        sqlx::query(&query)
            .bind(url)
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Obra not found".to_string()))
    }
}
