use super::prompt::Prompter;
use super::render;
use super::session::Session;
use super::setup::Cli;
use clap::Parser;
use console::Term;
use std::io::{self, IsTerminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unidb::api::UnidbApi;
use unidb::config::{resolve_config_dir, StoreKind, UnidbConfig};
use unidb::error::Result;
use unidb::store::{Backend, Indexed, Linear};

const LOG_ENV: &str = "UNIDB_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let config = apply_overrides(UnidbConfig::load(&config_dir)?, &cli);
    debug!(dir = %config_dir.display(), ?config, "effective configuration");

    if cli.show_config {
        println!("# {}", UnidbConfig::path_in(&config_dir).display());
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if cli.write_config {
        let path = config.save(&config_dir)?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    if !config.color {
        colored::control::set_override(false);
    }

    match config.store {
        StoreKind::Linear => start::<Linear>(&config),
        StoreKind::Indexed => start::<Indexed>(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "unidb=debug" } else { "unidb=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn apply_overrides(mut config: UnidbConfig, cli: &Cli) -> UnidbConfig {
    if let Some(store) = cli.store {
        config.store = store;
    }
    if cli.sample {
        config.load_sample_on_start = true;
    }
    if cli.yes {
        config.confirm_destructive = false;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }
    config
}

fn start<B: Backend>(config: &UnidbConfig) -> Result<()> {
    let term = Term::stdout();
    if config.clear_screen && io::stdout().is_terminal() {
        term.clear_screen()?;
    }

    let mut api = UnidbApi::<B>::default();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.write(&render::banner())?;

    if config.load_sample_on_start {
        let result = api.load_sample();
        prompter.write(&render::messages(&result.messages))?;
    }

    debug!(store = %config.store, "session starting");
    Session::new(api, prompter, config.confirm_destructive).run()
}
