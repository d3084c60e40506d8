use serde::{Deserialize, Serialize};

/// The date a listing was added, as it appears in listing data.
///
/// `month` is a full English month name ("January", "march", ...); it is
/// only resolved to a month index when a search needs the listing's
/// calendar instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedDate {
    pub month: String,
    pub day: u32,
    pub year: i32,
}

impl AddedDate {
    pub fn new(day: u32, month: impl Into<String>, year: i32) -> Self {
        Self {
            month: month.into(),
            day,
            year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    /// Category label such as "House" or "Flat".
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub bedrooms: u32,
    pub postcode: String,
    pub added: AddedDate,

    // Descriptive fields, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floorplan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Property {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
        bedrooms: u32,
        postcode: impl Into<String>,
        added: AddedDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            price,
            bedrooms,
            postcode: postcode.into(),
            added,
            tenure: None,
            location: None,
            description: None,
            long_description: None,
            picture: None,
            images: Vec::new(),
            floorplan: None,
            url: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tenure(mut self, tenure: impl Into<String>) -> Self {
        self.tenure = Some(tenure.into());
        self
    }
}

/// On-disk shape of a listings file: `{ "properties": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Catalog {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
