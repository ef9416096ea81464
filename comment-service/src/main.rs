use actix_web::{middleware::Logger, web, App, HttpServer};
use comment_service::handlers;
use comment_service::services::CommentService;
use comment_service::store::{ContentStore, PgStore};
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match comment_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting comment-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    let pg_store = PgStore::new(pool);
    pg_store.ensure_schema().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to ensure database schema: {e}"),
        )
    })?;

    tracing::info!("Connected to database, schema ensured");

    let store: Arc<dyn ContentStore> = Arc::new(pg_store);
    let store_data: web::Data<dyn ContentStore> = web::Data::from(store.clone());
    let service_data = web::Data::new(CommentService::new(store));
    let auth_data = web::Data::new(config.auth.clone());

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .app_data(service_data.clone())
            .app_data(auth_data.clone())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/health", web::get().to(handlers::health_summary))
            .service(
                web::scope("/items").service(
                    web::resource("/{item_id}/comments")
                        .route(web::post().to(handlers::create_comment))
                        .route(web::get().to(handlers::get_item_comments)),
                ),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
