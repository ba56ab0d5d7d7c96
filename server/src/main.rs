//! Cohort enrollment API server
//!
//! Serves the enrollment, payment, plan, and admin endpoints consumed by
//! the bootcamp front-end.
//!
//! Usage:
//!   cohort-server --port 8080 --database enrollments.db
//!
//! Without --database, records live in memory and are lost on restart.

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use cohort_server::{build_router, AppState};
use cohort_store::Backend;
use std::path::PathBuf;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "cohort-server")]
#[command(about = "Cohort enrollment and admin HTTP API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// SQLite database file (omit to keep enrollments in memory)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Restrict CORS to this origin (default: allow any)
    #[arg(long)]
    cors_origin: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Cohort enrollment server starting...");

    let backend = match &args.database {
        Some(path) => Backend::Sqlite(path.clone()),
        None => Backend::Memory,
    };
    let store = backend.open().context("Failed to open enrollment store")?;
    info!("Enrollment store ready ({} backend)", store.backend_name());

    let cors = cors_layer(args.cors_origin.as_deref())?;
    let app = build_router(AppState::new(store)).layer(cors);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let backend_label = match &args.database {
        Some(path) => format!("sqlite ({})", path.display()),
        None => "memory".to_string(),
    };
    println!("\n========================================");
    println!("  Cohort Enrollment Server Running");
    println!("========================================");
    println!("  Port:     {}", args.port);
    println!("  Storage:  {}", backend_label);
    println!("  API root: http://localhost:{}/api", args.port);
    println!("========================================\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(match origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .with_context(|| format!("Invalid CORS origin: {origin}"))?;
            layer.allow_origin(origin)
        }
        None => layer.allow_origin(Any),
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
