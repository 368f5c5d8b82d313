// Route exports
pub mod compatibility;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

pub use compatibility::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(compatibility::configure),
    );
}

/// Map malformed JSON bodies to the shared error shape
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = ErrorResponse::bad_request("invalid_json", format!("Invalid JSON: {}", err));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
