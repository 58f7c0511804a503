use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::services::foto::FotoService;
use crate::AppState;

pub fn create_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{id}").route(web::delete().to(delete_foto)));
}

async fn delete_foto(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let deleted = FotoService::new(&state.db).delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Foto not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(true))
}
