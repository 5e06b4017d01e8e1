//! Generation endpoint

use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::debug;

use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// `POST /generate`
///
/// The body is taken as untyped JSON so the validator can report every
/// structural problem in one response.
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    debug!("Generate request received");
    let response = state.dispatcher.dispatch(&body).await?;
    Ok(HttpResponse::Ok().json(response))
}
