//! Main entry point for the keytool CLI application

use clap::Parser;
use keytool_cli::cli::{Cli, CommandContext, run};
use keytool_cli::config::KeyToolConfig;
use keytool_cli::store::{FieldStore, JsonFileFieldStore, MemoryFieldStore};
use keytool_common::error::LoggingTransformer;
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    LoggingTransformer::init();

    let cli = Cli::parse();
    let config = match KeyToolConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut store: Box<dyn FieldStore> = if cli.no_store {
        Box::new(MemoryFieldStore::new())
    } else {
        let path = cli.store.clone().unwrap_or_else(|| config.store_path.clone());
        match JsonFileFieldStore::open(path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut ctx = CommandContext {
        config: &config,
        store: store.as_mut(),
        use_json: cli.json,
        out: &mut out,
    };

    let result = run(&mut ctx, cli.command).await;
    drop(ctx);
    out.flush()?;

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
