//! # Listing Sources
//!
//! Searches run over listings supplied by a [`ListingStore`]. The trait is
//! read-only: propsearch never writes listing data back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a JSON listings file of the form
//!   `{ "properties": [ ... ] }`, read on every call.
//! - [`memory::InMemoryStore`]: listings held in a `Vec`, for tests and for
//!   callers that already have the records in hand.
//!
//! Both return listings in their stored order, which is the order search
//! results keep.

use crate::error::Result;
use crate::model::Property;

pub mod fs;
pub mod memory;

pub trait ListingStore {
    /// All listings, in stored order.
    fn list_properties(&self) -> Result<Vec<Property>>;

    /// A single listing by id.
    fn get_property(&self, id: &str) -> Result<Property>;
}
