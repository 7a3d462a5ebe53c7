use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::runtime::BackendRuntime;
use clap::Parser;
use client_core::{BlogSession, Catalog, HttpRatingTransport, RatingSubmitter};
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{BlogApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "techblog-gui", about = "TechBlog desktop reader")]
struct Args {
    /// Where article ratings are POSTed.
    #[arg(long, env = "TECHBLOG_RATINGS_URL")]
    endpoint: Option<String>,
}

impl Args {
    fn into_startup(self) -> StartupConfig {
        let mut startup = StartupConfig::default();
        if let Some(endpoint) = self.endpoint {
            startup.endpoint = endpoint;
        }
        startup
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let startup = Args::parse().into_startup();

    let backend = BackendRuntime::start()?;
    let transport = HttpRatingTransport::parse(&startup.endpoint)?;
    tracing::info!(endpoint = %transport.endpoint(), "ratings endpoint configured");
    let submitter = RatingSubmitter::new(Arc::new(transport), backend.handle());
    let session = BlogSession::new(Catalog::seeded(), submitter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TechBlog")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TechBlog",
        options,
        Box::new(|_cc| Ok(Box::new(BlogApp::new(session)))),
    )
    .map_err(|err| anyhow!("desktop GUI exited with error: {err}"))?;

    drop(backend);
    Ok(())
}
