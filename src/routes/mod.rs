pub mod diferenciais;
pub mod etapas;
pub mod fotos;
pub mod obras;
pub mod paginas;
pub mod site;

use actix_web::web;

use crate::middleware::AdminAuth;

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/site").configure(site::create_routes))
        .service(web::scope("/paginas").configure(paginas::create_routes))
        .service(web::scope("/obras").configure(obras::create_routes))
        .service(
            web::scope("/admin")
                .wrap(AdminAuth)
                .service(web::scope("/site").configure(site::create_admin_routes))
                .service(web::scope("/paginas").configure(paginas::create_admin_routes))
                .service(web::scope("/obras").configure(obras::create_admin_routes))
                .service(web::scope("/etapas").configure(etapas::create_admin_routes))
                .service(web::scope("/fotos").configure(fotos::create_admin_routes))
                .service(
                    web::scope("/diferenciais").configure(diferenciais::create_admin_routes),
                ),
        );
}
