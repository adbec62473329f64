//! Domain aggregates exposed by the thank-you-page service layer.

pub mod condition;
pub mod template;
pub mod types;
