use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::celebrities::CelebrityFilterQuery;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::categories::show_categories as show_categories_service;
use crate::services::celebrities::list_category_celebrities;

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => service_error_response(err),
    }
}

#[get("/categories/{slug}/celebrities")]
pub async fn show_category_celebrities(
    slug: web::Path<String>,
    query: web::Query<CelebrityFilterQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_category_celebrities(&slug, query.into_inner(), repo.get_ref()) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => service_error_response(err),
    }
}
