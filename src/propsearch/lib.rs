//! # Propsearch Architecture
//!
//! Propsearch is a **multi-criteria property listing filter**. Its core is a pure
//! function: given an ordered slice of listings and a loosely-typed set of
//! search criteria, return the listings that satisfy every active criterion, in
//! their original order.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, handles terminal I/O  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - search: predicate evaluation over the listings           │
//! │  - show, config                                             │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  normalize.rs / calendar.rs  │ │  Listing sources (store/)  │
//! │  - raw criteria → Constraint │ │  - FileStore, InMemoryStore│
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Two kinds of bad input
//!
//! Criteria come from people typing into forms, so they are treated leniently:
//! blank fields, the `"any"` token, unparsable numbers and unparsable dates all
//! mean "no constraint" and widen the result. Listings come from a data source,
//! so they are treated strictly: a listing whose `added.month` is not a month
//! name fails the search with [`error::SearchError::InvalidMonthName`] rather
//! than being silently mis-filtered. Callers that prefer to drop such listings
//! can use [`commands::search::search_skipping`] or the `skip` policy.
//!
//! ## Quick example
//!
//! ```
//! use propsearch::{search, AddedDate, Property, SearchCriteria};
//!
//! let listings = vec![
//!     Property::new("p1", "House", 300000.0, 3, "BR1 1AA", AddedDate::new(10, "January", 2024)),
//!     Property::new("p2", "Flat", 200000.0, 2, "NW1 2BB", AddedDate::new(5, "March", 2025)),
//! ];
//! let criteria = SearchCriteria::new().kind("house").max_price("350000");
//!
//! let found = search(&listings, &criteria).unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, "p1");
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Search evaluation and the other commands
//! - [`criteria`]: Raw, loosely-typed search criteria
//! - [`normalize`]: Criteria normalization into [`normalize::Constraint`]s
//! - [`calendar`]: Month names and listing dates
//! - [`format`]: Currency and date display helpers
//! - [`model`]: Listing types
//! - [`store`]: Listing sources
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod store;

pub use commands::search::{search, search_skipping};
pub use criteria::{RawValue, SearchCriteria};
pub use error::{Result, SearchError};
pub use format::{format_calendar_date, format_currency};
pub use model::{AddedDate, Property};
