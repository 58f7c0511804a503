use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::pagina::Pagina;
use crate::utils::time::current_timestamp_seconds;

/// Slug-keyed record store backing every editable piece of site content.
/// Kind-agnostic: payload structure is the caller's business.
pub struct PaginaService<'a> {
    db: &'a Database,
}

impl<'a> PaginaService<'a> {
    pub fn new(db: &'a Database) -> Self {
        PaginaService { db }
    }

    /// Exact-match lookup. `Ok(None)` when no row exists; callers treat
    /// absent and present-but-empty the same way.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Pagina>> {
        let result = sqlx::query_as::<_, Pagina>(
            r#"
            SELECT slug, titulo, conteudo, updated_at
            FROM pagina
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn list(&self) -> AppResult<Vec<Pagina>> {
        let paginas = sqlx::query_as::<_, Pagina>(
            r#"
            SELECT slug, titulo, conteudo, updated_at
            FROM pagina
            ORDER BY slug ASC
            "#,
        )
        .fetch_all(&self.db.pool)
        .await?;

        Ok(paginas)
    }

    /// Insert-or-update keyed by slug, as a single statement: a repeated
    /// save can never leave two rows for one slug, and saves to other slugs
    /// are not blocked.
    pub async fn upsert(
        &self,
        slug: &str,
        titulo: Option<&str>,
        conteudo: &str,
    ) -> AppResult<Pagina> {
        let now = current_timestamp_seconds();

        sqlx::query(
            r#"
            INSERT INTO pagina (slug, titulo, conteudo, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (slug) DO UPDATE
            SET titulo = EXCLUDED.titulo,
                conteudo = EXCLUDED.conteudo,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(slug)
        .bind(titulo)
        .bind(conteudo)
        .bind(now)
        .execute(&self.db.pool)
        .await?;

        self.get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to persist pagina".to_string()))
    }
}
