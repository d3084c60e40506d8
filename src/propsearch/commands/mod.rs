use crate::config::SearchConfig;
use crate::model::Property;

pub mod config;
pub mod search;
pub mod show;

pub use search::{SearchReport, SkippedRecord};

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_properties: Vec<Property>,
    /// Number of listings the command looked at.
    pub total: usize,
    /// Number of criteria that constrained the search.
    pub active_criteria: usize,
    pub skipped: Vec<SkippedRecord>,
    pub config: Option<SearchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_properties(mut self, properties: Vec<Property>) -> Self {
        self.listed_properties = properties;
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Result heading as shown above a listing page.
    pub fn headline(&self) -> String {
        if self.active_criteria == 0 {
            format!("All Properties ({})", self.total)
        } else {
            format!("{} Properties Found", self.listed_properties.len())
        }
    }
}
