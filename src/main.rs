mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::admin::{routes as admin_routes, SessionService};
use crate::features::gems::{routes as gems_routes, BirdeyeClient, GemService, TrendingProvider};
use crate::features::realtime::routes as realtime_routes;
use crate::features::referrals::routes as referrals_routes;
use crate::features::reports::models::seed_reports;
use crate::features::reports::{routes as reports_routes, InMemoryReportRepository, ReportService};
use crate::features::scan::{create_evaluator, routes as scan_routes, RiskEvaluator};
use crate::features::status::{handlers::not_found, routes as status_routes};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    if config.admin.uses_default_password() {
        tracing::warn!("ADMIN_PASSWORD not set, using the built-in default password");
    }

    // Reports
    let report_repository = Arc::new(InMemoryReportRepository::new(seed_reports()));
    let report_service = Arc::new(ReportService::new(report_repository));
    tracing::info!("Report service initialized");

    // Admin sessions
    let session_service = Arc::new(SessionService::new(config.admin.clone()));
    tracing::info!(
        "Session service initialized (ttl={}s)",
        config.admin.session_ttl.as_secs()
    );

    // Trending gems
    let provider: Option<Arc<dyn TrendingProvider>> = match config.birdeye.api_key.clone() {
        Some(api_key) => {
            let client = BirdeyeClient::new(&config.birdeye, api_key)
                .map_err(|e| anyhow::anyhow!("Failed to create Birdeye client: {}", e))?;
            tracing::info!(
                "Birdeye client initialized (chain={}, limit={})",
                config.birdeye.chain,
                config.birdeye.limit
            );
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("BIRDEYE_KEY not set, /api/gems will return an empty list");
            None
        }
    };
    let gem_service = Arc::new(GemService::new(
        provider,
        config.gem_cache.ttl,
        config.birdeye.limit,
    ));
    tracing::info!(
        "Gem service initialized (cache_ttl={}ms)",
        config.gem_cache.ttl.as_millis()
    );

    // Scan
    let evaluator = create_evaluator(config.scan.evaluator);
    tracing::info!("Scan evaluator initialized: {}", evaluator.name());

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let app = Router::new()
        .merge(swagger)
        .merge(reports_routes::routes(
            Arc::clone(&report_service),
            Arc::clone(&session_service),
        ))
        .merge(admin_routes::routes(Arc::clone(&session_service)))
        .merge(gems_routes::routes(gem_service))
        .merge(scan_routes::routes(evaluator))
        .merge(referrals_routes::routes())
        .merge(realtime_routes::routes())
        .merge(status_routes::routes())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("{}", shared::constants::HEALTH_BANNER);
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
