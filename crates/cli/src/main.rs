//! CRM CLI - job invocation and management tools.
//!
//! The external scheduler (cron, systemd timers, a task-queue worker)
//! drives the periodic jobs by invoking `crm run-job <name>` on each
//! tick; this binary is only the adapter, not a scheduler.
//!
//! # Usage
//!
//! ```bash
//! # Invoked by the scheduler
//! crm run-job heartbeat
//! crm run-job low-stock
//! crm run-job order-reminders
//! crm run-job weekly-report
//! crm run-job cleanup
//!
//! # Management commands
//! crm cleanup-customers
//! crm create-sample-data
//! crm migrate
//! ```
//!
//! A typical crontab:
//!
//! ```text
//! */5 * * * *  crm run-job heartbeat
//! 0 */12 * * * crm run-job low-stock
//! 0 8 * * *    crm run-job order-reminders
//! 0 6 * * 1    crm run-job weekly-report
//! 0 2 * * 0    crm run-job cleanup
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use crm_jobs::CrmConfig;

mod commands;

use commands::run::JobName;

#[derive(Parser)]
#[command(name = "crm")]
#[command(author, version, about = "CRM job runner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one periodic job to completion (scheduler entry point)
    RunJob {
        /// Which job to run
        #[arg(value_enum)]
        job: JobName,
    },
    /// Delete customers with no orders in the last year
    CleanupCustomers,
    /// Populate the store with sample customers, products, and orders
    CreateSampleData,
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    // Environment and tracing are initialized exactly once, before any
    // job runs; jobs themselves receive ready-made handles.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CrmConfig::from_env();

    match cli.command {
        Commands::RunJob { job } => commands::run::job(job, &config).await?,
        Commands::CleanupCustomers => commands::cleanup::run(&config).await?,
        Commands::CreateSampleData => commands::seed::run(&config).await?,
        Commands::Migrate => commands::migrate::run(&config).await?,
    }
    Ok(())
}
