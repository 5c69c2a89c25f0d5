use actix_web::http::header::CONTENT_DISPOSITION;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::OPERATOR_TOKEN_HEADER;
use crate::models::config::ServerConfig;
use crate::services::import_export::DownloadFile;
use crate::services::{OperatorAccess, ServiceError, ServiceResult};

pub mod categories;
pub mod celebrities;
pub mod enquiries;

/// Register every `/api` handler.
///
/// Fixed celebrity paths are registered before `/celebrities/{id}` so that
/// they are not captured by the id pattern.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(celebrities::list_celebrities)
            .service(celebrities::create_celebrity)
            .service(celebrities::import_celebrities)
            .service(celebrities::featured_celebrities)
            .service(celebrities::trending_celebrities)
            .service(celebrities::get_celebrity_by_slug)
            .service(celebrities::get_celebrity)
            .service(celebrities::record_view)
            .service(celebrities::like_celebrity)
            .service(celebrities::unlike_celebrity)
            .service(categories::show_categories)
            .service(categories::show_category_celebrities)
            .service(enquiries::submit_enquiry)
            .service(enquiries::export_enquiries)
            .service(enquiries::list_enquiries),
    );
}

/// Check the operator token header against the configured token.
pub fn operator_access(req: &HttpRequest, config: &ServerConfig) -> ServiceResult<OperatorAccess> {
    let presented = req
        .headers()
        .get(OPERATOR_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    OperatorAccess::verify(presented, &config.operator_token).inspect_err(|_| {
        log::warn!("Rejected operator request to {}", req.path());
    })
}

/// Translate a service failure into a JSON error response.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized" }))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "Not found" })),
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({ "error": message }))
        }
        ServiceError::Validation(details) => HttpResponse::BadRequest().json(json!({
            "error": "Invalid enquiry data",
            "details": details,
        })),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::Internal => HttpResponse::InternalServerError()
            .json(json!({ "error": "Internal server error" })),
    }
}

pub fn download_response(file: DownloadFile) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header((
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.file_name),
        ))
        .body(file.bytes)
}
