//! Transaction CLI commands
//!
//! Adding, listing, editing and deleting the earnings and expenses of a page.

use clap::{ArgAction, Subcommand};

use crate::config::Settings;
use crate::display::{format_page_transactions, format_transaction_details};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, TransactionKind};
use crate::services::{
    parse_share, CreateTransactionInput, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add an earning or expense to a page
    Add {
        /// Page name or ID
        page: String,
        /// earning or expense
        kind: TransactionKind,
        /// Amount (e.g., "45.50" or "$1,200")
        amount: String,
        /// Description
        description: String,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Day of month (1-31) the transaction falls due every month
        #[arg(short, long)]
        due_day: Option<u8>,
        /// Mark the transaction as recurring
        #[arg(short, long)]
        recurring: bool,
        /// Attribute part of the amount to a person, as NAME=AMOUNT (repeatable)
        #[arg(short, long = "split", value_name = "NAME=AMOUNT")]
        splits: Vec<String>,
    },

    /// List the transactions of a page
    List {
        /// Page name or ID
        page: String,
    },

    /// Show one transaction
    Show {
        /// Page name or ID
        page: String,
        /// Transaction ID or ID prefix
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Page name or ID
        page: String,
        /// Transaction ID or ID prefix
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category name or ID ("none" to clear)
        #[arg(short, long)]
        category: Option<String>,
        /// New due day (1-31, or "none" to make it one-time)
        #[arg(short, long)]
        due_day: Option<String>,
        /// Set or clear the recurring marker
        #[arg(short, long, action = ArgAction::Set, value_name = "true|false")]
        recurring: Option<bool>,
        /// Replace the people shares, as NAME=AMOUNT (repeatable)
        #[arg(short, long = "split", value_name = "NAME=AMOUNT")]
        splits: Vec<String>,
        /// Remove every people share
        #[arg(long, conflicts_with = "splits")]
        clear_splits: bool,
    },

    /// Delete a transaction
    Delete {
        /// Page name or ID
        page: String,
        /// Transaction ID or ID prefix
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        TransactionCommands::Add {
            page,
            kind,
            amount,
            description,
            category,
            due_day,
            recurring,
            splits,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;

            let mut input = CreateTransactionInput::new(kind, amount, description);
            input.category = category;
            input.due_date = due_day;
            input.is_recurring = recurring;
            input.shares = splits
                .iter()
                .map(String::as_str)
                .map(parse_share)
                .collect::<BudgetResult<Vec<_>>>()?;

            let txn = service.create(&page, input)?;
            println!(
                "Added {}: {} {}",
                kind,
                txn.description,
                txn.amount.format_with_symbol(&symbol)
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { page } => {
            let page = service.list(&page)?;
            let doc = storage.document.snapshot()?;
            print!("{}", format_page_transactions(&page, &doc, &symbol));
        }

        TransactionCommands::Show { page, id } => {
            let (_, txn) = service
                .find(&page, &id)?
                .ok_or_else(|| BudgetError::transaction_not_found(&id))?;
            let doc = storage.document.snapshot()?;
            print!("{}", format_transaction_details(&txn, &doc, &symbol));
        }

        TransactionCommands::Edit {
            page,
            id,
            amount,
            description,
            category,
            due_day,
            recurring,
            splits,
            clear_splits,
        } => {
            let amount = amount
                .map(|a| {
                    Money::parse(&a)
                        .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
                })
                .transpose()?;

            let shares = if !splits.is_empty() {
                Some(
                    splits
                        .iter()
                        .map(String::as_str)
                        .map(parse_share)
                        .collect::<BudgetResult<Vec<_>>>()?,
                )
            } else if clear_splits {
                Some(Vec::new())
            } else {
                None
            };

            let input = UpdateTransactionInput {
                amount,
                description,
                category: category.map(|c| (!is_none_keyword(&c)).then_some(c)),
                due_date: due_day.as_deref().map(parse_due_day).transpose()?,
                is_recurring: recurring,
                shares,
            };

            let txn = service.update(&page, &id, input)?;
            println!(
                "Updated transaction: {} {}",
                txn.description,
                txn.amount.format_with_symbol(&symbol)
            );
        }

        TransactionCommands::Delete { page, id } => {
            let txn = service.delete(&page, &id)?;
            println!(
                "Deleted transaction: {} {}",
                txn.description,
                txn.amount.format_with_symbol(&symbol)
            );
        }
    }

    Ok(())
}

fn is_none_keyword(value: &str) -> bool {
    value.trim().is_empty() || value.trim().eq_ignore_ascii_case("none")
}

/// `"none"` clears the due day; anything else must be a day number
fn parse_due_day(value: &str) -> BudgetResult<Option<u8>> {
    if is_none_keyword(value) {
        return Ok(None);
    }
    value
        .trim()
        .parse::<u8>()
        .map(Some)
        .map_err(|_| BudgetError::Validation(format!("Invalid due day: '{}'", value)))
}
