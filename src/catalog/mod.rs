mod persistence;
mod source;

pub use persistence::{load_items, load_items_csv, save_items, starter_items};
pub use source::{CatalogSource, FileCatalog};
