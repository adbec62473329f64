use actix_web::web;
use serde_json::json;
use thankyou_pages::domain::template::PageTemplate;
use thankyou_pages::models::config::ConfigFeatureGate;
use thankyou_pages::repository::memory::InMemoryTemplateRepository;
use thankyou_pages::routes::thank_you_page::{api_v1_thank_you_page, api_v1_thank_you_pages};

pub fn templates() -> Vec<PageTemplate> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "name": "Default thank you",
            "status": "enabled",
            "store_ids": [1],
            "customer_group_ids": [1, 2],
            "priority": 100,
            "from_date": null,
            "to_date": null,
            "condition": {"type": "combine", "aggregator": "all", "value": true},
            "created_at": "2026-01-05T09:12:00",
            "updated_at": "2026-03-18T14:02:00"
        },
        {
            "id": 2,
            "name": "High value order",
            "status": "enabled",
            "store_ids": [1, 2],
            "customer_group_ids": [1],
            "priority": 10,
            "from_date": null,
            "to_date": null,
            "condition": {
                "type": "combine",
                "aggregator": "all",
                "value": true,
                "conditions": [
                    {
                        "type": "order_attribute",
                        "attribute": "grand_total",
                        "operator": ">=",
                        "value": "200"
                    }
                ]
            },
            "created_at": "2026-01-20T11:45:00",
            "updated_at": "2026-01-20T11:45:00"
        },
        {
            "id": 3,
            "name": "Holiday season",
            "status": "enabled",
            "store_ids": [1],
            "customer_group_ids": [1, 2, 3],
            "priority": 20,
            "from_date": "2026-11-20",
            "to_date": "2026-12-31",
            "condition": {"type": "combine", "aggregator": "any", "value": true},
            "created_at": "2026-02-02T08:00:00",
            "updated_at": "2026-05-11T16:30:00"
        },
        {
            "id": 4,
            "name": "Wholesale follow-up",
            "status": "disabled",
            "store_ids": [2],
            "customer_group_ids": [3],
            "priority": 30,
            "from_date": null,
            "to_date": null,
            "condition": {"type": "combine", "aggregator": "all", "value": true},
            "created_at": "2026-03-01T10:20:00",
            "updated_at": "2026-04-07T09:55:00"
        },
        {
            "id": 5,
            "name": "First purchase welcome",
            "status": "enabled",
            "store_ids": [1, 2, 3],
            "customer_group_ids": [1],
            "priority": 15,
            "from_date": null,
            "to_date": null,
            "condition": {"type": "combine", "aggregator": "all", "value": true},
            "created_at": "2026-04-15T13:05:00",
            "updated_at": "2026-04-15T13:05:00"
        }
    ]))
    .expect("fixture templates should deserialize")
}

pub fn repo() -> InMemoryTemplateRepository {
    InMemoryTemplateRepository::new(templates())
}

/// Wires the API routes with the fixture repository and the given feature
/// switch, mirroring the production app setup.
pub fn service_config(enabled: bool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/api")
                .service(api_v1_thank_you_pages)
                .service(api_v1_thank_you_page),
        )
        .app_data(web::Data::new(repo()))
        .app_data(web::Data::new(ConfigFeatureGate::new(enabled)));
    }
}
