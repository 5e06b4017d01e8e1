//! Provider and model catalog endpoints

use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::types::ModelInfo;
use crate::server::state::AppState;
use crate::utils::error::ErrorResponse;

/// `GET /providers` body
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<String>,
}

/// `GET /models/{provider}` body
#[derive(Debug, Serialize)]
pub struct ProviderModelsResponse<'a> {
    pub provider: &'a str,
    pub models: &'a [ModelInfo],
}

/// List registered provider names
pub async fn list_providers(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ProvidersResponse {
        providers: state.registry.list_names(),
    })
}

/// Catalogs of every registered provider, keyed by name
pub async fn list_models(state: web::Data<AppState>) -> HttpResponse {
    let providers = state.registry.all();
    let catalog: BTreeMap<&str, &[ModelInfo]> = providers
        .iter()
        .map(|p| (p.name(), p.available_models()))
        .collect();

    debug!(providers = catalog.len(), "Listing models");
    HttpResponse::Ok().json(catalog)
}

/// Catalog of one provider
pub async fn get_provider_models(
    state: web::Data<AppState>,
    provider: web::Path<String>,
) -> HttpResponse {
    match state.registry.get(&provider) {
        Ok(p) => HttpResponse::Ok().json(ProviderModelsResponse {
            provider: p.name(),
            models: p.available_models(),
        }),
        Err(e) => HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())),
    }
}
