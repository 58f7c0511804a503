use crate::error::AppError;
use crate::AppState;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::Error as ActixError,
    http::header,
    web,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

/// Basic-auth gate for the admin surface. One static credential pair from
/// the environment; unset credentials block everything.
pub struct AdminAuth;

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = AdminAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::Internal("App state not found".to_string()))?;

            let (user, pass) = match (
                state.config.admin_user.as_deref(),
                state.config.admin_pass.as_deref(),
            ) {
                (Some(u), Some(p)) => (u.to_string(), p.to_string()),
                _ => {
                    tracing::warn!("Admin credentials not configured, blocking admin access");
                    return Err(unauthorized().into());
                }
            };

            let credentials = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Basic "))
                .and_then(|encoded| BASE64.decode(encoded).ok())
                .and_then(|decoded| String::from_utf8(decoded).ok());

            let authorized = match credentials.as_deref().and_then(|c| c.split_once(':')) {
                Some((u, p)) => u == user && p == pass,
                None => false,
            };

            if !authorized {
                return Err(unauthorized().into());
            }

            service.call(req).await
        })
    }
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Acesso restrito".to_string())
}
