use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A listing's `added.month` is not one of the twelve English month names.
    #[error("Invalid month name: {0:?}")]
    InvalidMonthName(String),

    #[error("Date out of range: {day} {month} {year}")]
    DateOutOfRange { year: i32, month: String, day: u32 },

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SearchError {
    /// True for faults in the listing data itself (as opposed to I/O or user input).
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidMonthName(_) | SearchError::DateOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
