use actix_web::{web, HttpResponse};

use crate::error::AppResult;
use crate::models::etapa::PercentualForm;
use crate::services::etapa::EtapaService;
use crate::AppState;

pub fn create_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{id}").route(web::post().to(update_percentual)));
}

/// Values outside 0..=100 are clamped, not rejected.
async fn update_percentual(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<PercentualForm>,
) -> AppResult<HttpResponse> {
    let etapa = EtapaService::new(&state.db)
        .update_percentual(&id, payload.percentual)
        .await?;

    Ok(HttpResponse::Ok().json(etapa))
}
