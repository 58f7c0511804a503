use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::etapa::Etapa;

pub struct EtapaService<'a> {
    db: &'a Database,
}

impl<'a> EtapaService<'a> {
    pub fn new(db: &'a Database) -> Self {
        EtapaService { db }
    }

    pub async fn list_by_obra(&self, obra_id: &str) -> AppResult<Vec<Etapa>> {
        let etapas = sqlx::query_as::<_, Etapa>(
            r#"
            SELECT id, obra_id, nome, percentual
            FROM etapa
            WHERE obra_id = $1
            ORDER BY nome ASC
            "#,
        )
        .bind(obra_id)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(etapas)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Etapa>> {
        let result = sqlx::query_as::<_, Etapa>(
            r#"
            SELECT id, obra_id, nome, percentual
            FROM etapa
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn update_percentual(&self, id: &str, percentual: i32) -> AppResult<Etapa> {
        let valor = percentual.clamp(0, 100);

        sqlx::query("UPDATE etapa SET percentual = $1 WHERE id = $2")
            .bind(valor)
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Etapa not found".to_string()))
    }
}
