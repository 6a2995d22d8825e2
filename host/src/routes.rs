use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource, Responder};
use common::config::AppConfig;

/// `GET /config.json`: backend addresses for the browser bundle.
pub fn configure_routes() -> Resource {
    resource("/config.json").route(get().to(app_config))
}

async fn app_config(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
