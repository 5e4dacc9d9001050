use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use blog_api::data::user_repository::InMemoryUserRepository;
use blog_api::infrastructure::config::AppConfig;
use blog_api::infrastructure::logging::init_logging;
use blog_api::presentation::auth::{login, signup};
use blog_api::presentation::handlers::{AppState, get_blog, greeting, post_blog, put_blog};
use blog_api::presentation::middleware::RequestTraceMiddleware;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    info!("Logging initialized");

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    info!("Creating in-memory user repository");
    let user_repository = Arc::new(InMemoryUserRepository::new());

    let state = web::Data::new(AppState {
        user_repository,
        jwt_secret: config.jwt_secret.clone(),
    });
    info!("Application state initialized");

    info!("Configuring HTTP server");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(RequestTraceMiddleware)
            .route("/", web::get().to(greeting))
            .route("/signup", web::post().to(signup))
            .route("/login", web::post().to(login))
            .route("/blog", web::post().to(post_blog))
            .route("/blog", web::put().to(put_blog))
            .route("/blog/{id}", web::get().to(get_blog))
    });

    let server = server
        .bind(config.bind_addr.as_str())
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!(
        address = %config.bind_addr,
        routes = %"GET /, POST /signup, POST /login, POST /blog, PUT /blog, GET /blog/{id}",
        "Starting HTTP server"
    );
    server.run().await.context("Server terminated unexpectedly")
}
