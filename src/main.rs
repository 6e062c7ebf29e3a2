#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Catalog path override, set from the command line
static CATALOG_OVERRIDE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Get the catalog override (if --catalog was given)
pub fn catalog_override() -> Option<PathBuf> {
    CATALOG_OVERRIDE.get().cloned().flatten()
}

/// Vitrine - single-page portfolio showcase
#[derive(Parser, Debug)]
#[command(name = "vitrine-desktop")]
#[command(about = "Vitrine - portfolio showcase desktop app")]
struct Args {
    /// Catalog JSON file to load instead of the embedded catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window size as WIDTHxHEIGHT
    #[arg(long, default_value = "1200x860")]
    window_size: String,
}

/// Parse "WIDTHxHEIGHT"; falls back to the default on malformed input.
fn parse_window_size(spec: &str) -> (f64, f64) {
    let parsed = spec
        .split_once('x')
        .and_then(|(w, h)| Some((w.trim().parse::<f64>().ok()?, h.trim().parse::<f64>().ok()?)))
        .filter(|(w, h)| *w > 0.0 && *h > 0.0);
    parsed.unwrap_or((1200.0, 860.0))
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = CATALOG_OVERRIDE.set(args.catalog.clone());

    let (width, height) = parse_window_size(&args.window_size);
    tracing::info!(width, height, catalog = ?args.catalog, "starting Vitrine");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Omar Nasser - Graphic Designer")
            .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
