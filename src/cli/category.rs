//! Category CLI commands
//!
//! Implements CLI commands for earning and expense category management.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::models::CategoryType;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only show one type (earning or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<CategoryType>,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category type (earning or expense)
        #[arg(short = 't', long = "type")]
        kind: CategoryType,
        /// Display color, e.g. "#4ECDC4" (defaults to the next palette color)
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BudgetResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = service.list(kind)?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Create { name, kind, color } => {
            let category = service.create(&name, kind, color.as_deref())?;
            println!("Created category: {}", category.name);
            println!("  Type: {}", category.kind);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Delete { category } => {
            let deleted = service.delete(&category)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
