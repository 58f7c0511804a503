use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::services::diferencial::DiferencialService;
use crate::AppState;

pub fn create_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{id}").route(web::delete().to(delete_diferencial)));
}

async fn delete_diferencial(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let deleted = DiferencialService::new(&state.db).delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Diferencial not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(true))
}
