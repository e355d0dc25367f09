use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use wedding_match::config::Settings;
use wedding_match::core::{CategoryGraph, Matcher};
use wedding_match::routes::{self, matches::AppState};
use wedding_match::services::{CatalogSupplier, JsonFileCatalog, NoCatalog};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting wedding match service...");

    let catalog: Arc<dyn CatalogSupplier> = match &settings.catalog.path {
        Some(path) => {
            let supplier = JsonFileCatalog::new(path);
            match supplier.snapshot() {
                Ok(items) => info!("Catalog file {} holds {} services", path, items.len()),
                Err(e) => warn!("Catalog file {} is not readable yet: {}", path, e),
            }
            Arc::new(supplier)
        }
        None => {
            warn!("No catalog configured, requests must send their catalog inline");
            Arc::new(NoCatalog)
        }
    };

    let graph = CategoryGraph::with_overrides(&settings.categories);
    let matcher = Matcher::new(graph);

    info!(
        "Matcher initialized ({} related, {} complementary overrides)",
        settings.categories.related.len(),
        settings.categories.complementary.len()
    );

    let app_state = AppState {
        catalog,
        matcher,
        default_limit: settings.matching.default_limit,
        max_limit: settings.matching.max_limit,
        reason_limit: settings.matching.reason_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))
    .map_err(|e| {
        tracing::error!("Failed to bind HTTP server: {}", e);
        e
    })?
    .run()
    .await
}
