use anyhow::Result;
use clap::{Parser, Subcommand};

use dealdesk_cli::catalog::Catalog;
use dealdesk_cli::cli::{
    handle_asset_command, handle_building_command, handle_estate_command, handle_open_command,
    handle_report_command, handle_transaction_command, AssetCommands, BuildingCommands,
    EstateCommands, ReportCommands, TransactionCommands,
};
use dealdesk_cli::config::logging::{init_tracing, resolve_format};
use dealdesk_cli::config::{paths::DealDeskPaths, settings::Settings};
use dealdesk_cli::reports::DashboardReport;
use dealdesk_cli::routes::Route;
use dealdesk_cli::services::TransactionService;
use dealdesk_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "dealdesk",
    version,
    about = "Terminal dashboard for real-estate investment transactions",
    long_about = "DealDesk tracks real-estate investment transactions, assets, \
                  buildings and rental units. It walks a transaction through \
                  initiation, screening, due diligence, risk assessment, \
                  approval and closing from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Route to open first, e.g. /transactions/new
        #[arg(short, long)]
        route: Option<String>,
    },

    /// Show headline figures and recent transactions
    Dashboard,

    /// Asset commands
    #[command(subcommand)]
    Asset(AssetCommands),

    /// Building commands
    #[command(subcommand)]
    Building(BuildingCommands),

    /// Estate (unit) commands
    #[command(subcommand)]
    Estate(EstateCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Portfolio and risk reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Render the view for a route path, e.g. /assets/1/buildings/b1
    Open {
        /// Route path
        route: String,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = DealDeskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&paths, &settings)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    let catalog = Catalog::builtin();

    match cli.command {
        Some(Commands::Tui { route }) => {
            let route = route.as_deref().map(Route::parse).transpose()?;
            dealdesk_cli::tui::run_tui(&catalog, &storage, &settings, route)?;
        }
        Some(Commands::Dashboard) => {
            let records = TransactionService::new(&catalog, &storage).list()?;
            print!(
                "{}",
                DashboardReport::generate(&records).format_terminal(&settings.date_format)
            );
        }
        Some(Commands::Asset(cmd)) => {
            handle_asset_command(&catalog, &storage, cmd)?;
        }
        Some(Commands::Building(cmd)) => {
            handle_building_command(&catalog, cmd)?;
        }
        Some(Commands::Estate(cmd)) => {
            handle_estate_command(&catalog, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&catalog, &storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&catalog, cmd)?;
        }
        Some(Commands::Open { route }) => {
            handle_open_command(&catalog, &storage, &settings, &route)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("DealDesk is already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized DealDesk at: {}", paths.base_dir().display());
            }
        }
        Some(Commands::Config) => {
            println!("DealDesk Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:        {}", settings.date_format);
            println!("  Validation gating:  {}", settings.validation_gating);
            println!("  Finalize redirect:  {} ms", settings.finalize_redirect_ms);
            println!("  TUI tick rate:      {} ms", settings.tick_rate_ms);
            println!("  Log format:         {:?}", resolve_format(&settings));
        }
        None => {
            println!("DealDesk - Real-estate investment transactions");
            println!();
            println!("Run 'dealdesk --help' for usage information.");
            println!("Run 'dealdesk tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
