use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::diferencial::DiferencialForm;
use crate::models::etapa::progresso_geral;
use crate::models::obra::{BannerKind, ConcluidaForm, ObraResumo};
use crate::services::diferencial::DiferencialService;
use crate::services::etapa::EtapaService;
use crate::services::foto::FotoService;
use crate::services::obra::ObraService;
use crate::services::storage::StorageService;
use crate::AppState;

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_obras)))
        .service(web::resource("/{slug}").route(web::get().to(get_obra_detail)));
}

pub fn create_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(admin_list_obras)))
        .service(web::resource("/{id}/concluida").route(web::post().to(set_concluida)))
        .service(web::resource("/{id}/banner/{tipo}").route(web::post().to(upload_banner)))
        .service(web::resource("/{id}/etapas").route(web::get().to(list_etapas)))
        .service(web::resource("/{id}/fotos").route(web::post().to(upload_foto)))
        .service(web::resource("/{id}/diferenciais").route(web::post().to(add_diferencial)));
}

async fn get_obras(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let obras = ObraService::new(&state.db).list().await?;
    let response: Vec<ObraResumo> = obras.into_iter().map(ObraResumo::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

async fn get_obra_detail(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let obra = ObraService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Obra não encontrada".to_string()))?;

    let etapas = EtapaService::new(&state.db).list_by_obra(&obra.id).await?;
    let fotos = FotoService::new(&state.db).list_by_obra(&obra.id).await?;
    let diferenciais = DiferencialService::new(&state.db)
        .list_by_obra(&obra.id)
        .await?;
    let progresso = progresso_geral(&etapas);

    Ok(HttpResponse::Ok().json(json!({
        "obra": ObraResumo::from(obra),
        "etapas": etapas,
        "progressoGeral": progresso,
        "fotos": fotos,
        "diferenciais": diferenciais,
    })))
}

/// Admin listing keeps both banner columns so the editor can preview the
/// render and the real photo side by side.
async fn admin_list_obras(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let obras = ObraService::new(&state.db).list().await?;
    Ok(HttpResponse::Ok().json(obras))
}

async fn set_concluida(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<ConcluidaForm>,
) -> AppResult<HttpResponse> {
    let obra = ObraService::new(&state.db)
        .set_concluida(&id, payload.concluida)
        .await?;

    Ok(HttpResponse::Ok().json(obra))
}

async fn upload_banner(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let (id, tipo) = path.into_inner();
    let kind = BannerKind::from_param(&tipo)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown banner type: {}", tipo)))?;

    let obra_service = ObraService::new(&state.db);
    let obra = obra_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Obra não encontrada".to_string()))?;

    let (filename, bytes) = read_upload(payload).await?;
    let object_path = StorageService::object_path(&obra.id, Some(kind.prefix()), &filename);

    // a failed upload aborts the save; the obra row is not touched
    state.storage.save(&object_path, &bytes).await?;
    let url = state.storage.public_url_for(&object_path);

    let obra = obra_service.set_banner(&obra.id, kind, &url).await?;

    Ok(HttpResponse::Ok().json(obra))
}

async fn list_etapas(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let obra = ObraService::new(&state.db)
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Obra não encontrada".to_string()))?;

    let etapas = EtapaService::new(&state.db).list_by_obra(&obra.id).await?;
    let progresso = progresso_geral(&etapas);

    Ok(HttpResponse::Ok().json(json!({
        "etapas": etapas,
        "progressoGeral": progresso,
    })))
}

async fn upload_foto(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let obra = ObraService::new(&state.db)
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Obra não encontrada".to_string()))?;

    let (filename, bytes) = read_upload(payload).await?;
    let object_path = StorageService::object_path(&obra.id, None, &filename);

    // a failed upload aborts the save; no foto row without a URL
    state.storage.save(&object_path, &bytes).await?;
    let url = state.storage.public_url_for(&object_path);

    let foto = FotoService::new(&state.db)
        .insert(&obra.id, &url, &object_path)
        .await?;

    Ok(HttpResponse::Ok().json(foto))
}

async fn add_diferencial(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<DiferencialForm>,
) -> AppResult<HttpResponse> {
    let titulo = payload.titulo.trim();
    if titulo.is_empty() {
        return Err(AppError::BadRequest("Titulo is required".to_string()));
    }

    let obra = ObraService::new(&state.db)
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Obra não encontrada".to_string()))?;

    let diferencial = DiferencialService::new(&state.db)
        .insert(&obra.id, titulo)
        .await?;

    Ok(HttpResponse::Ok().json(diferencial))
}

/// Pulls the first `file` field out of a multipart body.
async fn read_upload(mut payload: Multipart) -> AppResult<(String, Vec<u8>)> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("imagem")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Empty upload".to_string()));
        }

        return Ok((filename, bytes));
    }

    Err(AppError::BadRequest("No file field in upload".to_string()))
}
