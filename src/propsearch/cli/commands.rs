//! Context setup, dispatch and per-command handlers.
//!
//! - `run()`: parses arguments, installs logging, dispatches
//! - `init_context()`: resolves config dir and listings file, builds the API
//! - `handle_*()`: call the API and print rendered output

use super::render::{print_messages, render_config, render_details, render_results};
use super::setup::{Cli, Commands, SearchArgs};
use clap::Parser;
use propsearch::api::{ConfigAction, SearchApi};
use propsearch::config::SearchConfig;
use propsearch::criteria::SearchCriteria;
use propsearch::error::{Result, SearchError};
use propsearch::store::fs::FileStore;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PROPSEARCH_LOG";
const CONFIG_DIR_ENV: &str = "PROPSEARCH_CONFIG_DIR";
const LISTINGS_ENV: &str = "PROPSEARCH_LISTINGS";
const DEFAULT_LISTINGS_FILE: &str = "properties.json";

struct AppContext {
    api: SearchApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search(args)) => handle_search(&ctx, &args),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_search(&ctx, &SearchArgs::default()),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("propsearch=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("com", "propsearch", "propsearch")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SearchError::Config("Could not determine config dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = SearchConfig::load(&config_dir)?;

    let listings = cli
        .listings
        .clone()
        .or_else(|| std::env::var_os(LISTINGS_ENV).map(PathBuf::from))
        .or_else(|| config.listings_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LISTINGS_FILE));
    tracing::debug!(listings = %listings.display(), config_dir = %config_dir.display(), "context");

    let api = SearchApi::with_config(FileStore::new(listings), config_dir, &config);
    Ok(AppContext { api })
}

fn load_criteria(args: &SearchArgs) -> Result<SearchCriteria> {
    let base = match &args.criteria {
        Some(path) => SearchCriteria::from_json(&fs::read_to_string(path)?)?,
        None => SearchCriteria::default(),
    };
    Ok(base.merge(args.flag_criteria()))
}

fn handle_search(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let criteria = load_criteria(args)?;
    let result = ctx.api.search(&criteria)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.listed_properties)?);
    } else {
        print!("{}", render_results(&result));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show(id)?;
    for property in &result.listed_properties {
        print!("{}", render_details(property));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let is_show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
