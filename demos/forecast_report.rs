//! End-to-end demo: synthesize a small stochastic event set, plot cumulative
//! event counts, and assemble a forecast evaluation report notebook.
//!
//! Run with `cargo run --example forecast_report`. Output lands in
//! `./forecast_report_out/`.
use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use log::LevelFilter;

use quakeval_report::report::plots::plot_cumulative_events;
use quakeval_report::ReportBuilder;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Deterministic stand-in for a simulated aftershock sequence: event rate
/// decays with time, phase-shifted per simulation index.
fn synthetic_sequence(index: usize, days: f64) -> Vec<f64> {
    let mut events = Vec::new();
    let mut t = 0.05 + 0.01 * index as f64;
    let mut step = 0.02 + 0.003 * (index % 7) as f64;
    while t < days {
        events.push(t * MILLIS_PER_DAY);
        step *= 1.12;
        t += step;
    }
    events
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .init();

    let out_dir = std::path::Path::new("forecast_report_out");
    fs::create_dir_all(out_dir).context("Failed to create output directory")?;

    let duration_days = 30.0;
    let simulated: Vec<Vec<f64>> = (0..200).map(|i| synthetic_sequence(i, duration_days)).collect();
    let observed = synthetic_sequence(3, duration_days);

    let plot = plot_cumulative_events(&simulated, &observed, "Cumulative Event Counts")
        .map_err(anyhow::Error::msg)?;
    let plot_path = out_dir.join("cumulative_events.html");
    plot.write_html(&plot_path);
    log::info!("Wrote cumulative event plot to {}", plot_path.display());

    let mut fields = HashMap::new();
    fields.insert("simulation_name".to_string(), "Synthetic Mainshock".to_string());
    fields.insert("forecast_name".to_string(), "Synthetic ETAS".to_string());
    fields.insert("origin_time".to_string(), "1992-06-28 11:57:34 UTC".to_string());
    fields.insert("evaluation_time".to_string(), "1992-07-28 11:57:34 UTC".to_string());
    fields.insert("catalog_source".to_string(), "synthetic".to_string());
    fields.insert("num_simulations".to_string(), simulated.len().to_string());

    let mut builder = ReportBuilder::new();
    builder
        .add_introduction(&fields)
        .context("Failed to render report introduction")?;
    builder.add_result_figure("Cumulative Event Counts", 2, "cumulative_events.html");

    let summary = vec![
        vec!["Quantity".to_string(), "Value".to_string()],
        vec!["Simulations".to_string(), simulated.len().to_string()],
        vec!["Observed events".to_string(), observed.len().to_string()],
        vec!["Duration (days)".to_string(), duration_days.to_string()],
    ];
    let table = ReportBuilder::render_table(&summary, true)?;
    builder.add_sub_heading("Run Summary", 2, table);

    let report_path = builder.finalize(out_dir)?;
    log::info!("Report written to {}", report_path.display());
    Ok(())
}
