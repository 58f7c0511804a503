use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Diferencial {
    pub id: String,
    pub obra_id: String,
    pub titulo: String,
}

#[derive(Debug, Deserialize)]
pub struct DiferencialForm {
    pub titulo: String,
}
