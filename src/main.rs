#![windows_subsystem = "windows"]

mod app;

use clap::Parser;
use std::path::PathBuf;
use tileview::LayoutOptions;
use tracing_subscriber::EnvFilter;

/// Interactive playground for the tile layout engine.
#[derive(Parser, Debug)]
#[command(name = "tileview", version)]
struct Args {
    /// JSON file with layout options (ratios, big tile, animation)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tiles to start with
    #[arg(long, default_value_t = 4)]
    tiles: usize,

    /// Index of the tile that starts out big
    #[arg(long)]
    big: Option<usize>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tileview=info")),
        )
        .init();

    let args = Args::parse();

    let options = match args.config.as_deref() {
        Some(path) => match LayoutOptions::from_path(path) {
            Ok(options) => options,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => LayoutOptions {
            animate: tileview::Animate::Enabled(true),
            ..Default::default()
        },
    };

    let app = match app::TileViewApp::new(options, args.tiles, args.big) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Invalid layout options: {}", e);
            std::process::exit(2);
        }
    };

    let vp = eframe::egui::ViewportBuilder::default()
        .with_title("TileView")
        .with_inner_size([1024.0, 700.0])
        .with_min_inner_size([400.0, 300.0]);

    let native = eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    };

    eframe::run_native("TileView", native, Box::new(|_cc| Ok(Box::new(app))))
}
