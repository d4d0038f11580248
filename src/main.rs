use axum::{
    routing::{get, post, put},
    Router,
};
use freelance_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let public_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/freelancer/profile", get(routes::profile::get_profile))
        .route(
            "/api/freelancer/profiles",
            get(routes::profile::list_profiles),
        )
        .route("/api/job/postings", get(routes::job::list_postings))
        .route("/api/job/posting/:id", get(routes::job::get_posting))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::RateLimiter::new(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let authed_api = Router::new()
        .route(
            "/api/freelancer/profile",
            post(routes::profile::create_profile).put(routes::profile::update_profile),
        )
        .route("/api/job/posting", post(routes::job::create_posting))
        .route("/api/job/application", post(routes::job::create_application))
        .route("/api/freelancer/hire", post(routes::hire::hire_freelancer))
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::RateLimiter::new(config.authed_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let app = public_api
        .merge(authed_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
