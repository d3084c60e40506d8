//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for front
//! ends. It dispatches to `commands/*.rs`, applies the configured
//! [`InvalidRecordPolicy`], and returns structured [`CmdResult`]s. It does no
//! filtering of its own and no presentation.
//!
//! `SearchApi<S: ListingStore>` is generic over where listings come from:
//! `SearchApi<FileStore>` in the CLI, `SearchApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::{InvalidRecordPolicy, SearchConfig};
use crate::criteria::SearchCriteria;
use crate::error::Result;
use crate::store::ListingStore;
use std::path::{Path, PathBuf};

pub struct SearchApi<S: ListingStore> {
    store: S,
    config_dir: PathBuf,
    policy: InvalidRecordPolicy,
}

impl<S: ListingStore> SearchApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            store,
            config_dir,
            policy: InvalidRecordPolicy::default(),
        }
    }

    /// Build from a loaded config, taking its invalid-record policy.
    pub fn with_config(store: S, config_dir: PathBuf, config: &SearchConfig) -> Self {
        Self::new(store, config_dir).with_policy(config.invalid_records)
    }

    pub fn with_policy(mut self, policy: InvalidRecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> InvalidRecordPolicy {
        self.policy
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, criteria, self.policy)
    }

    pub fn show(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
