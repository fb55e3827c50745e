use clap::{CommandFactory, Parser};
use colored::*;
use flatrec::api::{CmdMessage, FlatrecApi, MessageLevel};
use flatrec::codec;
use flatrec::config::StoreConfig;
use flatrec::error::{FlatrecError, Result};
use flatrec::model::Record;
use flatrec::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(e.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help().map_err(FlatrecError::Io)?;
        return Err(FlatrecError::Usage("No command given".into()));
    };

    let mut api = init_api(&cli)?;

    match command {
        Commands::Init => handle_init(&mut api),
        Commands::Add { fields } => handle_add(&mut api, fields),
        Commands::List => handle_list(&api),
        Commands::Summary => handle_summary(&api),
    }
}

fn init_api(cli: &Cli) -> Result<FlatrecApi<FileStore>> {
    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = StoreConfig::load(&config_dir)?;
    if let Some(path) = &cli.store {
        config = config.with_store_path(path.clone());
    }
    if let Some(field) = &cli.sum_field {
        config = config.with_numeric_field(field.clone());
    }
    config.validate()?;

    tracing::debug!(?config, "resolved configuration");
    let store = FileStore::new(config.store_path.clone());
    Ok(FlatrecApi::new(store, config))
}

fn handle_init(api: &mut FlatrecApi<FileStore>) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut FlatrecApi<FileStore>, fields: &[String]) -> Result<()> {
    let result = api.add_record(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &FlatrecApi<FileStore>) -> Result<()> {
    let result = api.list_records()?;
    print_records(&result.listed_records);
    Ok(())
}

fn handle_summary(api: &FlatrecApi<FileStore>) -> Result<()> {
    let result = api.summary()?;
    if let Some(summary) = &result.summary {
        println!("{}", summary);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", codec::serialize(record));
    }
}
