use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::warn;

use terminal_budget::config::{BudgetPaths, Settings};
use terminal_budget::currency::RateProvider;
use terminal_budget::display::{format_budget_list, format_wallet_list};
use terminal_budget::logging::init_tracing;
use terminal_budget::storage::{seed_example_budget, BudgetStore, JsonBudgetStore};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal wallet tracker with on-the-fly currency conversion",
    long_about = "Keep wallets in named budget files, see them in one table and get \
                  a running total in any currency. Run without a subcommand to \
                  open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// List budget files
    #[command(alias = "ls")]
    List,

    /// Show the wallets of one budget file
    Show {
        /// Budget file name
        name: String,
    },

    /// Write the default configuration and create the data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    init_tracing(&paths.log_file());

    let settings = Settings::load_or_create(&paths)?;
    let store = JsonBudgetStore::new(paths.clone(), settings.default_base.clone())?;

    match cli.command {
        None | Some(Commands::Tui) => {
            if settings.seed_example && store.list_budgets()?.is_empty() {
                if let Err(e) = seed_example_budget(&store) {
                    warn!(error = %e, "failed to seed example budget");
                }
            }
            let rates = RateProvider::from_settings(&settings, &paths)?;
            terminal_budget::tui::run_tui(&store, &rates)?;
        }
        Some(Commands::List) => {
            let files = store.list_budgets()?;
            println!("{}", format_budget_list(&files, Utc::now()));
        }
        Some(Commands::Show { name }) => {
            let file = store.load_budget(&name)?;
            println!("{} ({})", file.name, file.default_currency);
            println!();
            print!("{}", format_wallet_list(&file));
        }
        Some(Commands::Init) => {
            println!("Initializing terminal-budget at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'budget' to launch the interactive interface.");
        }
        Some(Commands::Config) => {
            println!("terminal-budget Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Budget files:     {}", paths.files_dir().display());
            println!("Rate cache:       {}", paths.cache_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Primary rate API:  {}", settings.primary_api);
            println!("  Backup rate API:   {}", settings.backup_api);
            println!("  Cache TTL:         {}s", settings.cache_ttl);
            println!("  Default currency:  {}", settings.default_base);
            println!("  Request timeout:   {}s", settings.request_timeout_secs);
            println!("  Seed example:      {}", settings.seed_example);
        }
    }

    Ok(())
}
