use super::ListingStore;
use crate::error::{Result, SearchError};
use crate::model::Property;

/// In-memory listings for testing and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    properties: Vec<Property>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }
}

impl ListingStore for InMemoryStore {
    fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    fn get_property(&self, id: &str) -> Result<Property> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| SearchError::PropertyNotFound(id.to_string()))
    }
}
