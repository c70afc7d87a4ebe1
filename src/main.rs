use anyhow::Context;
use opsdash::application::generator::MetricGenerator;
use opsdash::config::DashboardConfig;
use opsdash::domain::panel::DashboardLayout;
use opsdash::domain::timeline::Timeline;
use opsdash::interfaces::dashboard::DashboardApp;
use opsdash::interfaces::design_system::DesignSystem;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let config = DashboardConfig::from_env().context("Failed to load dashboard config")?;
    info!(
        "Starting opsdash {} (seed: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.seed
    );

    let timeline = Timeline::now().context("Failed to build timeline")?;
    let snapshot = MetricGenerator::with_seed(config.seed)
        .snapshot(timeline)
        .context("Failed to generate metrics")?;

    let app = DashboardApp::new(
        config.window.title.clone(),
        &snapshot,
        &DashboardLayout::standard(),
    );

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(&config.window.title),
        ..Default::default()
    };

    info!(
        "Opening window {}x{}",
        config.window.width, config.window.height
    );

    eframe::run_native(
        &config.window.title,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    info!("Window closed, exiting");
    Ok(())
}
