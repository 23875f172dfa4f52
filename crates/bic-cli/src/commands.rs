use std::sync::Arc;

use colored::Colorize;

use bic_registry::Registry;
use bic_server::{RegistryServer, ServerConfig};
use bic_store::InMemoryRecordStore;

use crate::cli::{Cli, Command, ImportArgs, ServeArgs};
use crate::import::import_csv;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Import(args) => cmd_import(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let registry = Registry::new(Arc::new(InMemoryRecordStore::new()));
    if let Some(seed) = &args.seed {
        let report = import_csv(seed, &registry)?;
        println!(
            "{} Seeded {} records ({} skipped) from {}",
            "✓".green().bold(),
            report.imported.to_string().bold(),
            report.skipped,
            seed.display(),
        );
    }

    println!(
        "BIC registry server on {}",
        config.bind_addr.to_string().bold()
    );
    let server = RegistryServer::new(config, registry);
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server.serve())?;
    Ok(())
}

fn cmd_import(args: ImportArgs) -> anyhow::Result<()> {
    // Loads into a throwaway store: this is a validation pass over the file.
    let registry = Registry::new(Arc::new(InMemoryRecordStore::new()));
    let report = import_csv(&args.input, &registry)?;
    if report.skipped == 0 {
        println!(
            "{} {} rows imported cleanly",
            "✓".green().bold(),
            report.imported.to_string().bold(),
        );
    } else {
        println!(
            "{} {} rows imported, {} rejected",
            "!".yellow().bold(),
            report.imported.to_string().bold(),
            report.skipped.to_string().yellow(),
        );
    }
    Ok(())
}
