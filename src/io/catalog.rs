//! Observed-catalog CSV reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

/// Observed events loaded from a catalog file.
#[derive(Debug, Clone)]
pub struct ObservedCatalog {
    /// Event origin times in epoch milliseconds, file order.
    pub event_times: Vec<f64>,
    /// Optional event magnitudes, parallel to `event_times` when present.
    pub magnitudes: Option<Vec<f64>>,
    /// Catalog name, defaulting to the file stem.
    pub name: String,
}

impl ObservedCatalog {
    pub fn event_count(&self) -> usize {
        self.event_times.len()
    }
}

/// Configuration for reading observed-catalog CSV files.
#[derive(Debug, Clone)]
pub struct CatalogReaderConfig {
    /// Column name holding event origin times (epoch milliseconds).
    pub time_column: String,
    /// Optional column name for magnitudes.
    pub magnitude_column: Option<String>,
}

impl Default for CatalogReaderConfig {
    fn default() -> Self {
        Self {
            time_column: "origin_time".to_string(),
            magnitude_column: Some("magnitude".to_string()),
        }
    }
}

/// Read an observed catalog CSV with the default column names.
pub fn read_catalog_csv<P: AsRef<Path>>(path: P) -> Result<ObservedCatalog> {
    read_catalog_csv_with_config(path, &CatalogReaderConfig::default())
}

/// Read an observed catalog CSV using a custom configuration.
pub fn read_catalog_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &CatalogReaderConfig,
) -> Result<ObservedCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open catalog file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read catalog header row")?
        .clone();

    let time_idx = find_column(&headers, &config.time_column)
        .ok_or_else(|| anyhow!("Missing time column '{}'", config.time_column))?;
    let magnitude_idx = config
        .magnitude_column
        .as_deref()
        .and_then(|name| find_column(&headers, name));

    let mut event_times = Vec::new();
    let mut magnitudes = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let time = record
            .get(time_idx)
            .ok_or_else(|| anyhow!("Missing time value at row {}", row_idx + 1))?
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid origin time at row {}", row_idx + 1))?;
        event_times.push(time);

        if let Some(idx) = magnitude_idx {
            let magnitude = record
                .get(idx)
                .ok_or_else(|| anyhow!("Missing magnitude at row {}", row_idx + 1))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid magnitude at row {}", row_idx + 1))?;
            magnitudes.push(magnitude);
        }
    }

    let name = path
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());

    Ok(ObservedCatalog {
        event_times,
        magnitudes: magnitude_idx.map(|_| magnitudes),
        name,
    })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
