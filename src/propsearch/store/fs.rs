use super::ListingStore;
use crate::error::{Result, SearchError};
use crate::model::{Catalog, Property};
use std::fs;
use std::path::{Path, PathBuf};

/// Listings read from a JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let content = fs::read_to_string(&self.path)?;
        let catalog = Catalog::from_json(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            count = catalog.properties.len(),
            "loaded listings"
        );
        Ok(catalog)
    }
}

impl ListingStore for FileStore {
    fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.load_catalog()?.properties)
    }

    fn get_property(&self, id: &str) -> Result<Property> {
        self.load_catalog()?
            .properties
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SearchError::PropertyNotFound(id.to_string()))
    }
}
