//! # CLI Layer
//!
//! This is **one possible front end** for propsearch, standing in for the
//! search form and results page. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! Every criterion flag is handed to the library as raw text, exactly as a
//! form field would be, so `--min-price any` or `--from ''` behave like an
//! empty field: no constraint.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup, dispatch and per-command handlers
//! - `render`: Output formatting (headline, result rows, details, messages)

mod commands;
mod render;
pub mod setup;

pub use commands::run;
