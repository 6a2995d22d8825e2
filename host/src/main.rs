mod assets;
mod config;
mod routes;

use crate::config::HostConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                log::warn!("could not open a browser: {err}");
            }
        });
    }

    info!("Admin console at {}", url);
    info!(
        "Backend config: {}",
        serde_json::to_string(&config.app).unwrap_or_default()
    );

    let app_config = web::Data::new(config.app.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(app_config.clone())
            .service(routes::configure_routes())
            .default_service(web::route().to(assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
