use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::forms::celebrities::{AddCelebrityForm, AddCelebrityFormPayload, CelebrityFilterQuery};
use crate::forms::import_export::{UploadCelebritiesForm, parse_upload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{operator_access, service_error_response};
use crate::services::ServiceError;
use crate::services::celebrities::{
    Engagement, create_celebrity as create_celebrity_service,
    featured_celebrities as featured_celebrities_service, get_celebrity as get_celebrity_service,
    get_celebrity_by_slug as get_celebrity_by_slug_service,
    list_celebrities as list_celebrities_service, record_engagement,
    trending_celebrities as trending_celebrities_service,
};
use crate::services::import_export::import_celebrities as import_celebrities_service;

#[derive(Debug, Deserialize)]
struct FeaturedQueryParams {
    category: Option<String>,
}

#[get("/celebrities")]
pub async fn list_celebrities(
    query: web::Query<CelebrityFilterQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_celebrities_service(query.into_inner(), repo.get_ref()) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => service_error_response(err),
    }
}

#[get("/celebrities/featured")]
pub async fn featured_celebrities(
    query: web::Query<FeaturedQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match featured_celebrities_service(query.category.as_deref(), repo.get_ref()) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => service_error_response(err),
    }
}

#[get("/celebrities/trending")]
pub async fn trending_celebrities(repo: web::Data<DieselRepository>) -> impl Responder {
    match trending_celebrities_service(repo.get_ref()) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => service_error_response(err),
    }
}

#[get("/celebrities/slug/{slug}")]
pub async fn get_celebrity_by_slug(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_celebrity_by_slug_service(&slug, repo.get_ref()) {
        Ok(celebrity) => HttpResponse::Ok().json(celebrity),
        Err(err) => service_error_response(err),
    }
}

#[get("/celebrities/{id}")]
pub async fn get_celebrity(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_celebrity_service(id.into_inner(), repo.get_ref()) {
        Ok(celebrity) => HttpResponse::Ok().json(celebrity),
        Err(err) => service_error_response(err),
    }
}

fn engagement_response(id: i32, engagement: Engagement, repo: &DieselRepository) -> HttpResponse {
    match record_engagement(id, engagement, repo) {
        Ok(counters) => HttpResponse::Ok().json(counters),
        Err(err) => service_error_response(err),
    }
}

#[post("/celebrities/{id}/view")]
pub async fn record_view(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    engagement_response(id.into_inner(), Engagement::View, repo.get_ref())
}

#[post("/celebrities/{id}/like")]
pub async fn like_celebrity(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    engagement_response(id.into_inner(), Engagement::Like, repo.get_ref())
}

#[post("/celebrities/{id}/unlike")]
pub async fn unlike_celebrity(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    engagement_response(id.into_inner(), Engagement::Unlike, repo.get_ref())
}

#[post("/celebrities")]
pub async fn create_celebrity(
    request: HttpRequest,
    server_config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCelebrityForm>,
) -> impl Responder {
    let access = match operator_access(&request, &server_config) {
        Ok(access) => access,
        Err(err) => return service_error_response(err),
    };

    let payload: AddCelebrityFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    match create_celebrity_service(payload, access, repo.get_ref()) {
        Ok(celebrity) => HttpResponse::Created().json(celebrity),
        Err(err) => service_error_response(err),
    }
}

#[post("/celebrities/import")]
pub async fn import_celebrities(
    request: HttpRequest,
    server_config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadCelebritiesForm>,
) -> impl Responder {
    let access = match operator_access(&request, &server_config) {
        Ok(access) => access,
        Err(err) => return service_error_response(err),
    };

    let upload = match parse_upload(&mut form) {
        Ok(upload) => upload,
        Err(e) => {
            log::warn!("Rejected celebrity upload: {e}");
            return service_error_response(ServiceError::from(e));
        }
    };

    match import_celebrities_service(&upload, access, repo.get_ref()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => service_error_response(err),
    }
}
