use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use purchase_predictor::config::{LoggingSettings, Settings};
use purchase_predictor::core::ThinkingDelay;
use purchase_predictor::routes::{self, AppState};
use purchase_predictor::services::SessionStore;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is configured from the settings, so fall back to defaults to report this
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting purchase predictor service...");

    let sessions = SessionStore::new(
        settings.prediction.session_capacity,
        settings.prediction.session_idle_secs,
    );
    let delay = ThinkingDelay::from_millis(settings.prediction.delay_ms);

    info!(
        "Session store initialized (capacity: {}, idle: {}s, delay: {}ms)",
        settings.prediction.session_capacity,
        settings.prediction.session_idle_secs,
        settings.prediction.delay_ms
    );

    let app_state = AppState { sessions, delay };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::path_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
