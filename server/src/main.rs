// server/src/main.rs

// Entry point for the moviegraph API server: load settings, set up
// logging, connect to the graph store, and serve the route table until
// a termination signal arrives.

mod api;
mod config;
mod enrich;
mod seed;

use std::fs::File;
use std::net::SocketAddr;

use anyhow::Result;
use log::{info, LevelFilter};
use simplelog::{
    ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger,
};
use store::GraphStore;
use tmdb::TmdbClient;
use tokio::signal::unix::{signal, SignalKind};

use crate::config::Settings;

/// Terminal output plus a flat log file, the same events in both.
fn init_logging(log_file: &str) -> Result<()> {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), File::create(log_file)?),
    ])?;
    Ok(())
}

async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to set up SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to set up SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env();
    init_logging(&settings.log_file)?;

    let store = GraphStore::connect(&settings.store).await?;
    let tmdb = TmdbClient::new(settings.tmdb.clone());

    let addr: SocketAddr = ([0, 0, 0, 0], settings.http_port).into();
    info!("moviegraph API listening on {}", addr);

    let (_, server) = warp::serve(api::routes(store, tmdb))
        .bind_with_graceful_shutdown(addr, shutdown_signal());
    server.await;

    info!("Server stopped");
    Ok(())
}
