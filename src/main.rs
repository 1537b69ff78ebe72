use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod agent;
mod ai;
mod config;
mod controllers;
mod db;
mod http;
mod models;
mod tools;

use agent::Orchestrator;
use ai::GeminiClient;
use config::Config;
use db::Database;
use tools::WebSearchTool;

pub struct AppState {
    pub db: Arc<Database>,
    pub orchestrator: Arc<Orchestrator>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing database at {}", config.database_path);
    let db = Database::new(&config.database_path).expect("Failed to initialize database");
    let db = Arc::new(db);

    log::info!("Initializing Gemini client");
    let generator =
        Arc::new(GeminiClient::from_config(&config).expect("Failed to initialize Gemini client"));

    log::info!("Search webhook at {}", config.search_webhook_url);
    let search_tool = Arc::new(WebSearchTool::new(&config.search_webhook_url));

    let orchestrator = Arc::new(Orchestrator::new(generator, search_tool));

    log::info!("Starting orchestrator server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                orchestrator: Arc::clone(&orchestrator),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::query::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
