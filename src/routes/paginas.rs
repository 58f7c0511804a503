use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::models::pagina::{PaginaForm, PaginaResponse};
use crate::services::SiteContentService;
use crate::AppState;

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{slug}").route(web::get().to(get_pagina)));
}

pub fn create_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_paginas)))
        .service(web::resource("/{slug}").route(web::post().to(save_pagina)));
}

/// A page that was never saved is an explicit empty state, not a default.
async fn get_pagina(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let pagina = SiteContentService::new(&state.db)
        .load_page(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Página não cadastrada".to_string()))?;

    Ok(HttpResponse::Ok().json(PaginaResponse::from(pagina)))
}

async fn list_paginas(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let paginas = SiteContentService::new(&state.db).list_pages().await?;
    Ok(HttpResponse::Ok().json(paginas))
}

async fn save_pagina(
    state: web::Data<AppState>,
    slug: web::Path<String>,
    payload: web::Json<PaginaForm>,
) -> AppResult<HttpResponse> {
    let slug = slug.into_inner();
    if slug.trim().is_empty() {
        return Err(AppError::BadRequest("Slug is required".to_string()));
    }

    let pagina = SiteContentService::new(&state.db)
        .save_page(&slug, payload.titulo.as_deref(), &payload.conteudo)
        .await?;

    Ok(HttpResponse::Ok().json(pagina))
}
