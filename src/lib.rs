use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::{ConfigFeatureGate, ServerConfig};
use crate::repository::memory::InMemoryTemplateRepository;
use crate::routes::thank_you_page::{api_v1_thank_you_page, api_v1_thank_you_pages};

pub mod criteria;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Name of the list query this service answers, as callers know it.
pub const THANK_YOU_PAGES_FIELD: &str = "thankYouPages";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Load the template records once; the repository shares them across workers.
    let repo = InMemoryTemplateRepository::from_file(&server_config.templates_file)
        .map_err(|e| std::io::Error::other(format!("Failed to load templates: {e}")))?;

    let gate = ConfigFeatureGate::from(&server_config);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(api_v1_thank_you_pages)
                    .service(api_v1_thank_you_page),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(gate.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
