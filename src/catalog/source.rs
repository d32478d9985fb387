use std::path::{Path, PathBuf};

use crate::catalog::persistence::{load_items, load_items_csv};
use crate::error::{PlannerError, Result};
use crate::models::FoodItem;

/// A source of catalog items.
///
/// The meal selector only ever sees the returned snapshot; callers pick
/// the backend.
pub trait CatalogSource {
    /// Fetch the full catalog snapshot.
    fn fetch(&self) -> Result<Vec<FoodItem>>;

    /// Fetch, degrading to an empty catalog on failure.
    ///
    /// An empty catalog is a valid selector input, so fetch failures
    /// reduce to the empty-catalog case instead of aborting the run.
    fn fetch_or_empty(&self) -> Vec<FoodItem> {
        match self.fetch() {
            Ok(items) => items,
            Err(e) => {
                eprintln!("Failed to fetch food catalog: {}", e);
                Vec::new()
            }
        }
    }
}

/// File-backed catalog, dispatching on extension (`.json` or `.csv`).
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileCatalog {
    fn fetch(&self) -> Result<Vec<FoodItem>> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match extension {
            "json" => load_items(&self.path),
            "csv" => load_items_csv(&self.path),
            other => Err(PlannerError::UnsupportedFormat(format!(
                "{} (expected .json or .csv)",
                if other.is_empty() { "<none>" } else { other }
            ))),
        }
    }
}
