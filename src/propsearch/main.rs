//! # Propsearch CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination. Everything the CLI
//! does goes through [`propsearch::api::SearchApi`]; filtering itself never
//! happens here.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
