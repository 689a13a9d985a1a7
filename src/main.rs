//! GSD Assessment Server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gsd_assessment_lib::api;
use gsd_assessment_lib::config::Config;
use gsd_assessment_lib::middleware::RequestLogger;
use gsd_assessment_lib::store::{Registry, SharedRegistry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if Config::from_env().is_ok() { 0 } else { 1 });
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, GSD_ALLOWED_ORIGINS must list explicit origins");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  GSD Assessment Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    if config.enable_reset {
        warn!("POST /api/v1/reset is enabled - all data can be wiped by any caller");
    }

    // All records live in this registry and are lost on shutdown
    let registry = SharedRegistry::new(Registry::new());

    let bind_address = config.bind_address();
    let allowed_origins = config.allowed_origins.clone();
    let enable_reset = config.enable_reset;
    let openapi = api::ApiDoc::openapi();

    let worker_count = if config.is_development() {
        4
    } else {
        num_cpus::get()
    };
    info!(
        "Starting server at http://{} ({} workers), API docs at /docs/",
        bind_address, worker_count
    );

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(registry.clone()))
            .app_data(api::json_config())
            .app_data(api::path_config())
            .configure(api::configure_root_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_user_routes)
                    .configure(api::configure_image_routes)
                    .configure(api::configure_model_routes)
                    .configure(api::configure_assessment_routes)
                    .configure(api::configure_quality_metrics_routes)
                    .configure(|cfg| {
                        if enable_reset {
                            api::configure_reset_routes(cfg);
                        }
                    }),
            )
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
