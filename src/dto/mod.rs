//! Data transfer objects bridging the resolver and its API consumers.

pub mod thank_you_page;
