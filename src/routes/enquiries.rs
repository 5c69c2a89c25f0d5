use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::forms::enquiries::EnquiryForm;
use crate::models::config::ServerConfig;
use crate::notifier::EnquiryNotifier;
use crate::repository::DieselRepository;
use crate::routes::{download_response, operator_access, service_error_response};
use crate::services::enquiries::{
    export_enquiries as export_enquiries_service, list_enquiries as list_enquiries_service,
    submit_enquiry as submit_enquiry_service,
};

#[derive(Debug, Deserialize)]
struct EnquiryListQueryParams {
    page: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ExportQueryParams {
    format: Option<String>,
}

#[post("/enquiries")]
pub async fn submit_enquiry(
    repo: web::Data<DieselRepository>,
    notifier: web::Data<dyn EnquiryNotifier>,
    web::Json(form): web::Json<EnquiryForm>,
) -> impl Responder {
    match submit_enquiry_service(form, repo.get_ref(), notifier.get_ref()).await {
        Ok(enquiry) => HttpResponse::Created().json(enquiry),
        Err(err) => service_error_response(err),
    }
}

#[get("/enquiries")]
pub async fn list_enquiries(
    request: HttpRequest,
    params: web::Query<EnquiryListQueryParams>,
    server_config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let access = match operator_access(&request, &server_config) {
        Ok(access) => access,
        Err(err) => return service_error_response(err),
    };

    match list_enquiries_service(params.page.unwrap_or(1), access, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[get("/enquiries/export")]
pub async fn export_enquiries(
    request: HttpRequest,
    params: web::Query<ExportQueryParams>,
    server_config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let access = match operator_access(&request, &server_config) {
        Ok(access) => access,
        Err(err) => return service_error_response(err),
    };

    let format = params.format.as_deref().unwrap_or("csv");
    match export_enquiries_service(format, access, repo.get_ref()) {
        Ok(file) => download_response(file),
        Err(err) => service_error_response(err),
    }
}
