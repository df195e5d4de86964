//! Transaction service
//!
//! Adds earnings and expenses to a page, resolving the category and people
//! they reference, edits them and removes them again.

use chrono::Utc;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    BudgetDocument, BudgetPage, CategoryId, Money, PersonShare, Transaction, TransactionKind,
};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    /// Category ID, name, or ID prefix
    pub category: Option<String>,
    pub due_date: Option<u8>,
    pub is_recurring: bool,
    /// (person identifier, amount) pairs
    pub shares: Vec<(String, Money)>,
}

impl CreateTransactionInput {
    pub fn new(kind: TransactionKind, amount: Money, description: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category: None,
            due_date: None,
            is_recurring: false,
            shares: Vec::new(),
        }
    }
}

/// Changes to apply to an existing transaction; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub amount: Option<Money>,
    pub description: Option<String>,
    /// `Some(None)` clears the category
    pub category: Option<Option<String>>,
    /// `Some(None)` makes the transaction one-time again
    pub due_date: Option<Option<u8>>,
    pub is_recurring: Option<bool>,
    /// Replaces every existing share
    pub shares: Option<Vec<(String, Money)>>,
}

impl UpdateTransactionInput {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.is_recurring.is_none()
            && self.shares.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a transaction to a page
    pub fn create(&self, page: &str, input: CreateTransactionInput) -> BudgetResult<Transaction> {
        let (page_name, txn) = self.storage.document.update(|doc| {
            let mut txn = Transaction::new(input.amount, input.description.trim());
            txn.due_date = input.due_date;
            txn.is_recurring = input.is_recurring;

            if let Some(identifier) = &input.category {
                txn = txn.with_category(resolve_category(doc, identifier, input.kind)?);
            }
            txn.people = resolve_shares(doc, &input.shares)?;

            txn.validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            let page_id = doc
                .find_page(page)
                .map(|p| p.id.clone())
                .ok_or_else(|| BudgetError::page_not_found(page))?;
            let target = doc
                .page_mut(&page_id)
                .ok_or_else(|| BudgetError::page_not_found(page))?;
            target.transactions_mut(input.kind).push(txn.clone());

            Ok((target.name.clone(), txn))
        })?;
        self.storage.document.save()?;

        info!(
            page = %page_name,
            transaction = %txn.id,
            kind = %input.kind,
            amount = txn.amount.cents(),
            "added transaction"
        );
        Ok(txn)
    }

    /// The page holding the transactions, both lists in insertion order
    pub fn list(&self, page: &str) -> BudgetResult<BudgetPage> {
        self.storage
            .document
            .snapshot()?
            .find_page(page)
            .cloned()
            .ok_or_else(|| BudgetError::page_not_found(page))
    }

    /// Find a transaction on a page by ID or ID prefix
    pub fn find(
        &self,
        page: &str,
        identifier: &str,
    ) -> BudgetResult<Option<(TransactionKind, Transaction)>> {
        let page = self.list(page)?;
        Ok(page
            .find_transaction(identifier)
            .map(|(kind, txn)| (kind, txn.clone())))
    }

    /// Edit a transaction in place
    ///
    /// The category must still accept the transaction's kind. `updated_at` is
    /// bumped even when the new values equal the old ones.
    pub fn update(
        &self,
        page: &str,
        identifier: &str,
        input: UpdateTransactionInput,
    ) -> BudgetResult<Transaction> {
        if input.is_empty() {
            return Err(BudgetError::Validation(
                "Nothing to update: pass at least one field to change".into(),
            ));
        }

        let (before, after) = self.storage.document.update(|doc| {
            let page_id = doc
                .find_page(page)
                .map(|p| p.id.clone())
                .ok_or_else(|| BudgetError::page_not_found(page))?;
            let (kind, before) = doc
                .page(&page_id)
                .and_then(|p| p.find_transaction(identifier))
                .map(|(kind, txn)| (kind, txn.clone()))
                .ok_or_else(|| BudgetError::transaction_not_found(identifier))?;

            let mut txn = before.clone();
            if let Some(amount) = input.amount {
                txn.amount = amount;
            }
            if let Some(description) = &input.description {
                txn.description = description.trim().to_string();
            }
            if let Some(category) = &input.category {
                txn.category_id = match category.as_deref() {
                    Some(identifier) => Some(resolve_category(doc, identifier, kind)?),
                    None => None,
                };
            }
            if let Some(due_date) = input.due_date {
                txn.due_date = due_date;
            }
            if let Some(is_recurring) = input.is_recurring {
                txn.is_recurring = is_recurring;
            }
            if let Some(shares) = &input.shares {
                txn.people = resolve_shares(doc, shares)?;
            }
            txn.updated_at = Utc::now();

            txn.validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            let slot = doc
                .page_mut(&page_id)
                .and_then(|p| p.transaction_mut(&before.id))
                .ok_or_else(|| BudgetError::transaction_not_found(identifier))?;
            *slot = txn.clone();

            Ok((before, txn))
        })?;
        self.storage.document.save()?;

        let mut changes = Vec::new();
        if before.amount != after.amount {
            changes.push(format!("amount: {} -> {}", before.amount, after.amount));
        }
        if before.description != after.description {
            changes.push(format!(
                "description: {} -> {}",
                before.description, after.description
            ));
        }
        if before.category_id != after.category_id {
            changes.push("category".to_string());
        }
        if before.due_date != after.due_date || before.is_recurring != after.is_recurring {
            changes.push("schedule".to_string());
        }
        if before.people != after.people {
            changes.push("people".to_string());
        }

        info!(
            transaction = %after.id,
            changes = %changes.join(", "),
            "updated transaction"
        );
        Ok(after)
    }

    /// Delete a transaction from a page
    pub fn delete(&self, page: &str, identifier: &str) -> BudgetResult<Transaction> {
        let txn = self.storage.document.update(|doc| {
            let page_id = doc
                .find_page(page)
                .map(|p| p.id.clone())
                .ok_or_else(|| BudgetError::page_not_found(page))?;
            let target = doc
                .page_mut(&page_id)
                .ok_or_else(|| BudgetError::page_not_found(page))?;

            let id = target
                .find_transaction(identifier)
                .map(|(_, txn)| txn.id.clone())
                .ok_or_else(|| BudgetError::transaction_not_found(identifier))?;
            target
                .remove_transaction(&id)
                .ok_or_else(|| BudgetError::transaction_not_found(identifier))
        })?;
        self.storage.document.save()?;

        info!(transaction = %txn.id, description = %txn.description, "deleted transaction");
        Ok(txn)
    }
}

fn resolve_category(
    doc: &BudgetDocument,
    identifier: &str,
    kind: TransactionKind,
) -> BudgetResult<CategoryId> {
    let category = doc
        .find_category(identifier)
        .ok_or_else(|| BudgetError::category_not_found(identifier))?;
    if !category.accepts(kind) {
        return Err(BudgetError::Validation(format!(
            "Category '{}' is an {} category and cannot tag an {}",
            category.name, category.kind, kind
        )));
    }
    Ok(category.id.clone())
}

fn resolve_shares(
    doc: &BudgetDocument,
    shares: &[(String, Money)],
) -> BudgetResult<Vec<PersonShare>> {
    shares
        .iter()
        .map(|(identifier, amount)| {
            doc.find_person(identifier)
                .map(|person| PersonShare::new(person.id.clone(), *amount))
                .ok_or_else(|| BudgetError::person_not_found(identifier.as_str()))
        })
        .collect()
}

/// Parse a `name=amount` split argument
pub fn parse_share(arg: &str) -> BudgetResult<(String, Money)> {
    let (name, amount) = arg.split_once('=').ok_or_else(|| {
        BudgetError::Validation(format!(
            "Invalid split '{}': expected NAME=AMOUNT",
            arg
        ))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::Validation(format!(
            "Invalid split '{}': person is missing",
            arg
        )));
    }

    let amount = Money::parse(amount)
        .map_err(|e| BudgetError::Validation(format!("Invalid split '{}': {}", arg, e)))?;

    Ok((name.to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::CategoryType;
    use crate::services::{CategoryService, PageService, PersonService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        PageService::new(&storage).create("Household").unwrap();
        CategoryService::new(&storage)
            .create("Groceries", CategoryType::Expense, None)
            .unwrap();
        CategoryService::new(&storage)
            .create("Salary", CategoryType::Earning, None)
            .unwrap();
        PersonService::new(&storage).add("Alex", None).unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_create_expense_with_category_and_share() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input = CreateTransactionInput::new(
            CategoryType::Expense,
            Money::from_dollars(80),
            "Weekly shop",
        );
        input.category = Some("groceries".into());
        input.shares = vec![("Alex".into(), Money::from_dollars(40))];

        let txn = service.create("Household", input).unwrap();
        assert!(txn.category_id.is_some());
        assert_eq!(txn.shares_total(), Money::from_dollars(40));

        let page = service.list("Household").unwrap();
        assert_eq!(page.expenses.len(), 1);
        assert!(page.earnings.is_empty());
    }

    #[test]
    fn test_category_type_must_match() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input =
            CreateTransactionInput::new(CategoryType::Earning, Money::from_dollars(10), "Refund");
        input.category = Some("Groceries".into());

        assert!(service.create("Household", input).unwrap_err().is_validation());
        assert_eq!(service.list("Household").unwrap().transaction_count(), 0);
    }

    #[test]
    fn test_unknown_references_are_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input =
            CreateTransactionInput::new(CategoryType::Expense, Money::from_dollars(10), "Lunch");
        input.shares = vec![("Nobody".into(), Money::from_dollars(5))];
        assert!(service
            .create("Household", input.clone())
            .unwrap_err()
            .is_not_found());

        input.shares.clear();
        assert!(service.create("Vacation", input).unwrap_err().is_not_found());
    }

    #[test]
    fn test_due_date_validated() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input =
            CreateTransactionInput::new(CategoryType::Expense, Money::from_dollars(900), "Rent");
        input.due_date = Some(32);
        assert!(service
            .create("Household", input.clone())
            .unwrap_err()
            .is_validation());

        input.due_date = Some(1);
        input.is_recurring = true;
        let txn = service.create("Household", input).unwrap();
        assert!(txn.recurs_monthly());
    }

    #[test]
    fn test_find_and_delete_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(
                "Household",
                CreateTransactionInput::new(
                    CategoryType::Earning,
                    Money::from_dollars(3000),
                    "Paycheck",
                ),
            )
            .unwrap();

        let (kind, found) = service.find("Household", txn.id.short()).unwrap().unwrap();
        assert_eq!(kind, CategoryType::Earning);
        assert_eq!(found.id, txn.id);

        service.delete("Household", txn.id.short()).unwrap();
        assert!(service.find("Household", txn.id.as_str()).unwrap().is_none());
        assert!(service
            .delete("Household", txn.id.as_str())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_update_changes_fields_and_bumps_timestamp() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input =
            CreateTransactionInput::new(CategoryType::Expense, Money::from_dollars(80), "Shop");
        input.shares = vec![("Alex".into(), Money::from_dollars(40))];
        let txn = service.create("Household", input).unwrap();

        let update = UpdateTransactionInput {
            amount: Some(Money::from_cents(9550)),
            description: Some("  Weekly shop ".into()),
            category: Some(Some("Groceries".into())),
            due_date: Some(Some(5)),
            is_recurring: Some(true),
            shares: Some(Vec::new()),
        };
        let updated = service.update("Household", txn.id.short(), update).unwrap();

        assert_eq!(updated.id, txn.id);
        assert_eq!(updated.amount, Money::from_cents(9550));
        assert_eq!(updated.description, "Weekly shop");
        assert!(updated.category_id.is_some());
        assert_eq!(updated.due_date, Some(5));
        assert!(updated.is_recurring);
        assert!(updated.people.is_empty());
        assert_eq!(updated.created_at, txn.created_at);
        assert!(updated.updated_at >= txn.updated_at);

        let (kind, stored) = service.find("Household", txn.id.as_str()).unwrap().unwrap();
        assert_eq!(kind, CategoryType::Expense);
        assert_eq!(stored, updated);
        assert_eq!(service.list("Household").unwrap().expenses.len(), 1);
    }

    #[test]
    fn test_update_leaves_unset_fields_and_clears_optional_ones() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input =
            CreateTransactionInput::new(CategoryType::Expense, Money::from_dollars(900), "Rent");
        input.category = Some("Groceries".into());
        input.due_date = Some(1);
        input.is_recurring = true;
        let txn = service.create("Household", input).unwrap();

        let update = UpdateTransactionInput {
            category: Some(None),
            due_date: Some(None),
            ..Default::default()
        };
        let updated = service.update("Household", txn.id.as_str(), update).unwrap();

        assert_eq!(updated.amount, Money::from_dollars(900));
        assert_eq!(updated.description, "Rent");
        assert!(updated.category_id.is_none());
        assert!(updated.due_date.is_none());
        assert!(updated.is_recurring);
    }

    #[test]
    fn test_update_revalidates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(
                "Household",
                CreateTransactionInput::new(
                    CategoryType::Earning,
                    Money::from_dollars(3000),
                    "Paycheck",
                ),
            )
            .unwrap();
        let id = txn.id.as_str();

        let wrong_kind = UpdateTransactionInput {
            category: Some(Some("Groceries".into())),
            ..Default::default()
        };
        assert!(service.update("Household", id, wrong_kind).unwrap_err().is_validation());

        let bad_day = UpdateTransactionInput {
            due_date: Some(Some(0)),
            ..Default::default()
        };
        assert!(service.update("Household", id, bad_day).unwrap_err().is_validation());

        let blank = UpdateTransactionInput {
            description: Some("   ".into()),
            ..Default::default()
        };
        assert!(service.update("Household", id, blank).unwrap_err().is_validation());

        let nobody = UpdateTransactionInput {
            shares: Some(vec![("Nobody".into(), Money::from_dollars(1))]),
            ..Default::default()
        };
        assert!(service.update("Household", id, nobody).unwrap_err().is_not_found());

        assert!(service
            .update("Household", id, UpdateTransactionInput::default())
            .unwrap_err()
            .is_validation());

        let unchanged = service.find("Household", id).unwrap().unwrap().1;
        assert_eq!(unchanged, txn);
    }

    #[test]
    fn test_update_unknown_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let update = UpdateTransactionInput {
            amount: Some(Money::from_dollars(1)),
            ..Default::default()
        };
        assert!(service
            .update("Household", "missing", update)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_parse_share() {
        assert_eq!(
            parse_share("Alex=12.50").unwrap(),
            ("Alex".to_string(), Money::from_cents(1250))
        );
        assert!(parse_share("Alex").is_err());
        assert!(parse_share("=5").is_err());
        assert!(parse_share("Alex=abc").is_err());
    }
}
