use std::sync::Arc;

use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

use neurofluent::auth::IdentityService;
use neurofluent::config::Config;
use neurofluent::gemini::GeminiClient;
use neurofluent::web::routes;
use neurofluent::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting NeuroFluent chat service");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; chat requests will fail until it is configured");
    }
    info!("Using Gemini model: {}", config.gemini_model);

    let bind_addr = (config.host.clone(), config.port);

    let app_state = Data::new(AppState {
        gemini: GeminiClient::new().with_base_url(config.gemini_base_url.clone()),
        verifier: Arc::new(IdentityService::new(config.identity_verify_url.clone())),
        config,
    });

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
