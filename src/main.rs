use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use launch_dashboard::app::LaunchDashboardApp;
use launch_dashboard::cli::Cli;
use launch_dashboard::data::{self, dashboard::on_site_or_range_change};
use launch_dashboard::state::AppState;
use launch_dashboard::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let Some(path) = cli.data_path().or_else(pick_data_file) else {
        log::info!("No launch table selected, exiting");
        return Ok(());
    };

    let dataset = data::loader::load_file(&path)
        .map_err(anyhow::Error::from)
        .inspect_err(|e| log::error!("{e:#}"))?;
    let range = cli.initial_range(&dataset)?;

    if cli.headless {
        let update = on_site_or_range_change(&dataset, &cli.site, &range);
        let json = serde_json::to_string_pretty(&update).context("serializing chart data")?;
        println!("{json}");
        return Ok(());
    }

    let state = AppState::new(dataset, cli.site.clone(), range);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::DASHBOARD_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}

/// Ask for the launch table once, before the window opens.
fn pick_data_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
}
