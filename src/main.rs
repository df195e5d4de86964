use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_category_command, handle_config_command, handle_page_command, handle_person_command,
    handle_report_command, handle_transaction_command, CategoryCommands, ConfigCommands,
    PageCommands, PersonCommands, ReportCommands, TransactionCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::logging::init_tracing;
use budget_tracker::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Household budget pages with daily budget and savings projections",
    long_about = "Track earnings and expenses on named budget pages, split them \
                  between household members, and see how much you can spend per \
                  day and save per month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with default categories
    Init,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Budget page management commands
    #[command(subcommand)]
    Page(PageCommands),

    /// Household member commands
    #[command(subcommand, alias = "people")]
    Person(PersonCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Reports and export
    #[command(subcommand)]
    Report(ReportCommands),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budget tracker at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  - Earnings: Salary, Freelance, Gifts");
            println!(
                "  - Expenses: Housing, Groceries, Utilities, Transportation, Dining Out, Entertainment"
            );
            println!();
            println!("Run 'budget page create <NAME>' to start a budget page.");
        }
        Some(Commands::Config { action }) => {
            handle_config_command(&paths, settings, action)?;
        }
        Some(Commands::Page(cmd)) => {
            handle_page_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Person(cmd)) => {
            handle_person_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("Budget Tracker - household budget pages");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget init' to set up default categories.");
        }
    }

    Ok(())
}
