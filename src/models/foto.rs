use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Foto {
    pub id: String,
    pub obra_id: String,
    pub url: String,
    pub path: Option<String>,
    pub created_at: i64,
}
