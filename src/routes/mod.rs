//! HTTP surface exposing the thank-you-page queries.

use actix_web::HttpResponse;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod thank_you_page;

/// Maps service failures onto HTTP statuses: a disabled feature answers 403,
/// bad arguments and out-of-range pages answer 400, storage trouble answers
/// an opaque 500.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::FeatureDisabled => {
            HttpResponse::Forbidden().json(json!({ "error": err.to_string() }))
        }
        ServiceError::InvalidArgument(_) | ServiceError::OutOfRange { .. } => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        ServiceError::Repository(err) => {
            error!("Failed to query thank you pages: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
