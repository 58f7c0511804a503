use actix_web::{web, HttpResponse};
use chrono::{Datelike, Utc};

use crate::error::AppResult;
use crate::models::site_content::{
    ContatoConfig, ContatoConfigPatch, FooterConfig, FooterConfigPatch, HomeConfig,
    HomeConfigPatch,
};
use crate::services::SiteContentService;
use crate::AppState;

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/home").route(web::get().to(get_home)))
        .service(web::resource("/contato").route(web::get().to(get_contato)))
        .service(web::resource("/footer").route(web::get().to(get_footer)));
}

pub fn create_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/home")
            .route(web::get().to(admin_get_home))
            .route(web::post().to(admin_save_home)),
    )
    .service(
        web::resource("/contato")
            .route(web::get().to(admin_get_contato))
            .route(web::post().to(admin_save_contato)),
    )
    .service(
        web::resource("/footer")
            .route(web::get().to(admin_get_footer))
            .route(web::post().to(admin_save_footer)),
    );
}

/// Visitor-facing reads degrade to defaults when the store is unreachable.
async fn get_home(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let cfg = match SiteContentService::new(&state.db).load_home().await {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load home config, serving defaults: {}", e);
            HomeConfig::default()
        }
    };

    Ok(HttpResponse::Ok().json(cfg))
}

async fn get_contato(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let cfg = match SiteContentService::new(&state.db).load_contato().await {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load contato config, serving defaults: {}", e);
            ContatoConfig::default()
        }
    };

    Ok(HttpResponse::Ok().json(cfg))
}

async fn get_footer(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut cfg = match SiteContentService::new(&state.db).load_footer().await {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load footer config, serving defaults: {}", e);
            FooterConfig::default()
        }
    };

    // substituted per request so the year is never a stored literal
    cfg.copyright = cfg.rendered_copyright(Utc::now().year());

    Ok(HttpResponse::Ok().json(cfg))
}

async fn admin_get_home(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let cfg = SiteContentService::new(&state.db).load_home().await?;
    Ok(HttpResponse::Ok().json(cfg))
}

async fn admin_save_home(
    state: web::Data<AppState>,
    payload: web::Json<HomeConfigPatch>,
) -> AppResult<HttpResponse> {
    let service = SiteContentService::new(&state.db);
    service.save_home(payload.into_inner()).await?;

    let cfg = service.load_home().await?;
    Ok(HttpResponse::Ok().json(cfg))
}

async fn admin_get_contato(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let cfg = SiteContentService::new(&state.db).load_contato().await?;
    Ok(HttpResponse::Ok().json(cfg))
}

async fn admin_save_contato(
    state: web::Data<AppState>,
    payload: web::Json<ContatoConfigPatch>,
) -> AppResult<HttpResponse> {
    let service = SiteContentService::new(&state.db);
    service.save_contato(payload.into_inner()).await?;

    let cfg = service.load_contato().await?;
    Ok(HttpResponse::Ok().json(cfg))
}

async fn admin_get_footer(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    // the template, with the `{year}` placeholder intact, for editing
    let cfg = SiteContentService::new(&state.db).load_footer().await?;
    Ok(HttpResponse::Ok().json(cfg))
}

async fn admin_save_footer(
    state: web::Data<AppState>,
    payload: web::Json<FooterConfigPatch>,
) -> AppResult<HttpResponse> {
    let service = SiteContentService::new(&state.db);
    service.save_footer(payload.into_inner()).await?;

    let cfg = service.load_footer().await?;
    Ok(HttpResponse::Ok().json(cfg))
}
