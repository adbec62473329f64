use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, get, web};

use crate::criteria::TemplateCriteriaBuilder;
use crate::domain::types::TemplateId;
use crate::dto::thank_you_page::ListTemplatesArgs;
use crate::models::config::ConfigFeatureGate;
use crate::repository::memory::InMemoryTemplateRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::thank_you_page::{get_thank_you_page, list_thank_you_pages};

#[get("/v1/thank-you-pages")]
pub async fn api_v1_thank_you_pages(
    params: web::Query<HashMap<String, String>>,
    gate: web::Data<ConfigFeatureGate>,
    repo: web::Data<InMemoryTemplateRepository>,
) -> impl Responder {
    let args = match ListTemplatesArgs::from_pairs(params.into_inner()) {
        Ok(args) => args,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match list_thank_you_pages(
        gate.get_ref(),
        &TemplateCriteriaBuilder,
        repo.get_ref(),
        crate::THANK_YOU_PAGES_FIELD,
        args,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/v1/thank-you-pages/{id}")]
pub async fn api_v1_thank_you_page(
    path: web::Path<i32>,
    gate: web::Data<ConfigFeatureGate>,
    repo: web::Data<InMemoryTemplateRepository>,
) -> impl Responder {
    let id = match TemplateId::new(path.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match get_thank_you_page(gate.get_ref(), repo.get_ref(), id) {
        Ok(Some(entry)) => HttpResponse::Ok().json(entry),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(e),
    }
}
