use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One slug-addressed content record. `conteudo` is opaque at this layer:
/// JSON for the named site configurations, plain text for free-form pages.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pagina {
    pub slug: String,
    pub titulo: Option<String>,
    pub conteudo: Option<String>,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct PaginaForm {
    pub titulo: Option<String>,
    pub conteudo: String,
}

#[derive(Debug, Serialize)]
pub struct PaginaResponse {
    pub slug: String,
    pub titulo: Option<String>,
    pub conteudo: String,
}

impl From<Pagina> for PaginaResponse {
    fn from(pagina: Pagina) -> Self {
        PaginaResponse {
            slug: pagina.slug,
            titulo: pagina.titulo,
            conteudo: pagina.conteudo.unwrap_or_default(),
        }
    }
}
