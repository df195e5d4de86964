//! Person CLI commands

use clap::Subcommand;

use crate::display::format_people_list;
use crate::error::BudgetResult;
use crate::services::PersonService;
use crate::storage::Storage;

/// Person subcommands
#[derive(Subcommand)]
pub enum PersonCommands {
    /// List household members
    List,

    /// Add a household member
    Add {
        /// Person name
        name: String,
        /// Display color, e.g. "#FF6B6B" (defaults to the next palette color)
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Rename or recolor a household member
    Edit {
        /// Person name or ID
        person: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New display color, e.g. "#4ECDC4"
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Remove a household member
    Remove {
        /// Person name or ID
        person: String,
    },
}

/// Handle a person command
pub fn handle_person_command(storage: &Storage, cmd: PersonCommands) -> BudgetResult<()> {
    let service = PersonService::new(storage);

    match cmd {
        PersonCommands::List => {
            let people = service.list()?;
            print!("{}", format_people_list(&people));
        }

        PersonCommands::Add { name, color } => {
            let person = service.add(&name, color.as_deref())?;
            println!("Added person: {} ({})", person.name, person.color);
            println!("  ID: {}", person.id);
        }

        PersonCommands::Edit {
            person,
            name,
            color,
        } => {
            let updated = service.update(&person, name.as_deref(), color.as_deref())?;
            println!("Updated person: {} ({})", updated.name, updated.color);
        }

        PersonCommands::Remove { person } => {
            let removed = service.remove(&person)?;
            println!("Removed person: {}", removed.name);
        }
    }

    Ok(())
}
