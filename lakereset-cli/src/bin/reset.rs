use std::error::Error;

use camino::Utf8PathBuf;
use clap::Parser;
use lakereset_core::admin::lancedb::LanceDbAdmin;
use lakereset_core::{app_config, ResetOptions, ResetProcedure, StdinConfirm};

#[derive(Parser, Debug)]
#[command(name = "lake-reset")]
#[command(version = "0.1")]
#[command(about = "drops and recreates store tables after confirmation", long_about = None)]
struct Args {
    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,
    /// Directory where the store data lives; overrides the configured uri
    #[arg(long)]
    data_directory: Option<Utf8PathBuf>,
    /// Check that the schema registry covers every live table before
    /// dropping anything
    #[arg(long)]
    preflight: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }

    let uri = match args.data_directory {
        Some(dir) => dir.into_string(),
        None => app_config::get_store_uri(),
    };
    let registry = app_config::get_schema_registry();

    let admin = LanceDbAdmin::connect(&uri).await?;
    let procedure = ResetProcedure::with_options(
        admin,
        registry,
        ResetOptions { preflight_registry: args.preflight },
    );

    let report = procedure.run(&mut StdinConfirm).await?;

    if report.declined {
        println!("Aborting...");
        return Ok(());
    }

    println!("Completed reset against {}: {} table(s) recreated, {} skipped.",
        &uri,
        report.reset_count(),
        report.skipped_count());

    Ok(())
}
