//! Paths to the example datasets shipped with the project artifacts.
//!
//! Pure configuration: the constants name artifact files relative to the
//! artifacts root and carry no behavior. Nothing here checks that the files
//! exist; readers surface their own errors.
use std::path::PathBuf;

const GRIDDED_FORECAST_ROOT: &str = "artifacts/ExampleForecasts/GriddedForecasts";
const CATALOG_FORECAST_ROOT: &str = "artifacts/ExampleForecasts/CatalogForecasts";
const OBSERVED_CATALOG_ROOT: &str = "artifacts/ObservedCatalogs";

/// Gridded forecast example files, relative to their root.
pub const HELMSTETTER_MAINSHOCK: &str = "helmstetter_et_al.hkj-fromXML.dat";
pub const HELMSTETTER_AFTERSHOCK: &str = "helmstetter_et_al.hkj.aftershock-fromXML.dat";

/// Catalog-based forecast example file.
pub const UCERF3_LANDERS: &str = "ucerf3-landers_1992-06-28T11-57-34-14.csv";

/// Observed catalog example file.
pub const COMCAT_EXAMPLE_CATALOG: &str = "sample_comcat_catalog.csv";

/// Resolve a gridded-forecast example file against the artifacts root.
pub fn gridded_forecast_path(root: &str, fname: &str) -> PathBuf {
    PathBuf::from(root).join(GRIDDED_FORECAST_ROOT).join(fname)
}

/// Resolve a catalog-forecast example file against the artifacts root.
pub fn catalog_forecast_path(root: &str, fname: &str) -> PathBuf {
    PathBuf::from(root).join(CATALOG_FORECAST_ROOT).join(fname)
}

/// Resolve an observed-catalog example file against the artifacts root.
pub fn observed_catalog_path(root: &str, fname: &str) -> PathBuf {
    PathBuf::from(root).join(OBSERVED_CATALOG_ROOT).join(fname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_under_artifacts_root() {
        let path = gridded_forecast_path("/data", HELMSTETTER_MAINSHOCK);
        assert!(path.starts_with("/data/artifacts/ExampleForecasts/GriddedForecasts"));
        assert!(path.ends_with(HELMSTETTER_MAINSHOCK));

        let path = observed_catalog_path(".", COMCAT_EXAMPLE_CATALOG);
        assert!(path.ends_with("ObservedCatalogs/sample_comcat_catalog.csv"));
    }

    #[test]
    fn forecast_roots_are_distinct() {
        let gridded = gridded_forecast_path("root", "f.dat");
        let catalog = catalog_forecast_path("root", "f.dat");
        assert_ne!(gridded, catalog);
    }
}
