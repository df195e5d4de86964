//! Budget page CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_page_list;
use crate::error::BudgetResult;
use crate::services::PageService;
use crate::storage::Storage;

/// Budget page subcommands
#[derive(Subcommand)]
pub enum PageCommands {
    /// List all budget pages
    List,

    /// Create a new budget page
    Create {
        /// Page name
        name: String,
    },

    /// Rename a budget page
    Rename {
        /// Page name or ID
        page: String,
        /// New name
        name: String,
    },

    /// Delete a budget page and all of its transactions
    Delete {
        /// Page name or ID
        page: String,
    },
}

/// Handle a page command
pub fn handle_page_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PageCommands,
) -> BudgetResult<()> {
    let service = PageService::new(storage);

    match cmd {
        PageCommands::List => {
            let pages = service.list()?;
            print!("{}", format_page_list(&pages, &settings.currency_symbol()));
        }

        PageCommands::Create { name } => {
            let page = service.create(&name)?;
            println!("Created budget page: {}", page.name);
            println!("  ID: {}", page.id);
        }

        PageCommands::Rename { page, name } => {
            let old = service.get(&page)?;
            let renamed = service.rename(&page, &name)?;
            println!("Renamed budget page: {} -> {}", old.name, renamed.name);
        }

        PageCommands::Delete { page } => {
            let deleted = service.delete(&page)?;
            println!(
                "Deleted budget page: {} ({} transactions)",
                deleted.name,
                deleted.transaction_count()
            );
        }
    }

    Ok(())
}
