//! HTTP route modules

pub mod generate;
pub mod models;

use actix_web::web;

use crate::server::handlers::{health_check, method_not_allowed};

/// Register every gateway route
///
/// Each path is a resource so a wrong method gets `405` instead of falling
/// through to the app-level `404`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate")
            .route(web::post().to(generate::generate))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/providers")
            .route(web::get().to(models::list_providers))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/models")
            .route(web::get().to(models::list_models))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/models/{provider}")
            .route(web::get().to(models::get_provider_models))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(method_not_allowed)),
    );
}
