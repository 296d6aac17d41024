use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt,util::SubscriberInitExt};

use bestfood::{config, reports::Report, seed, PgGateway, Shell, Store};

/// Console for the BestFood restaurant database.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli{
    /// TOML file holding the connection section.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, env = "BESTFOOD_CONFIG")]
    config:PathBuf,

    /// Section of the config file to read.
    #[arg(long, default_value = config::DEFAULT_SECTION)]
    section:String,

    #[command(subcommand)]
    command:Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands{
    /// Interactive menu (default).
    Shell,
    /// Create any missing tables.
    CreateTables,
    /// Insert the demo dataset into freshly created tables.
    Seed,
    /// Print one report (1-5).
    Report{
        number:usize,
    },
}

fn main()->anyhow::Result<()>{
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or("bestfood=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli=Cli::parse();

    let database_url=config::resolve_database_url(&cli.config,&cli.section)
        .context("Cannot load connection settings.")?;
    let mut gateway=PgGateway::new(database_url);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell=>{
            match gateway.server_version() {
                Ok(version)=>println!(":: PostgreSQL database version:\n   {version}"),
                Err(e)=>println!("!! {e}"),
            }

            let mut shell=Shell::new(gateway,io::stdin().lock(),io::stdout());
            shell.run()?;
        }
        Commands::CreateTables=>{
            gateway.create_tables()?;
            println!(":: All tables created successfully.");
        }
        Commands::Seed=>{
            println!(":: Inserting sample data ...");
            for (table,count) in seed::load_seed_data(&mut gateway)? {
                println!("   [Done] Inserting to '{table}' ({count} rows)");
            }
        }
        Commands::Report{number}=>{
            let report=Report::from_index(number)?;
            let rows=gateway.run_report(report)?;

            println!(":: {}",report);
            println!(":: {}",report.header().join(" | "));
            for row in rows {
                println!("   {}",row.join(" | "));
            }
        }
    }

    Ok(())
}
