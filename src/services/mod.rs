pub mod errors;
pub mod thank_you_page;

pub use crate::services::errors::{ServiceError, ServiceResult};

/// Reports whether the thank-you-page feature is switched on.
pub trait FeatureGate {
    fn is_enabled(&self) -> bool;
}
