//! Transaction service
//!
//! Turns raw user input into transactions and applies adds and deletes to
//! the ledger, recording each one in the audit log. All input validation
//! happens here; the ledger store itself accepts whatever it is given.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Catalog, Money, Transaction, TransactionId};
use crate::storage::Storage;

/// Date format accepted for new transactions
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated input for a new transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl TransactionInput {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Validate `input` against `catalog` and build the transaction
///
/// Checks run in a fixed order so the first problem found is the one
/// reported: required fields, amount format, amount sign, date, category.
pub fn build_transaction(catalog: &Catalog, input: &TransactionInput) -> LedgerResult<Transaction> {
    let amount_str = input.amount.trim();
    let category_name = input.category.trim();
    let date_str = input.date.trim();

    if amount_str.is_empty() || category_name.is_empty() || date_str.is_empty() {
        return Err(LedgerError::Validation(
            "Fill in the required fields: amount, category, date".into(),
        ));
    }

    let amount = Money::parse(amount_str).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid amount '{}'. Enter a number such as 1200.50",
            amount_str
        ))
    })?;

    if !amount.is_positive() {
        return Err(LedgerError::Validation(
            "Amount must be greater than 0".into(),
        ));
    }

    if NaiveDate::parse_from_str(date_str, DATE_FORMAT).is_err() {
        return Err(LedgerError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD (e.g. 2025-12-26)",
            date_str
        )));
    }

    let category = catalog
        .by_name(category_name)
        .cloned()
        .ok_or_else(|| {
            LedgerError::Validation(format!(
                "Choose a valid category ('{}' is not in the catalog)",
                category_name
            ))
        })?;

    Ok(Transaction::new(amount, category, date_str).with_description(input.description.trim()))
}

/// Service for adding and deleting transactions
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate input, append the transaction and audit it
    pub fn create(&mut self, input: &TransactionInput) -> LedgerResult<(TransactionId, Transaction)> {
        let txn = build_transaction(self.storage.ledger.catalog(), input)?;

        let id = self.storage.ledger.add_transaction(txn.clone())?;
        self.storage.log_create(id, &txn);

        Ok((id, txn))
    }

    /// Delete by position; `Ok(None)` when the index is out of range
    pub fn delete_at(&mut self, index: usize) -> LedgerResult<Option<Transaction>> {
        let id = match self.storage.ledger.get(index) {
            Some(entry) => entry.id,
            None => return Ok(None),
        };

        let removed = self.storage.ledger.delete_transaction(index)?;
        if let Some(txn) = &removed {
            self.storage.log_delete(id, txn);
        }
        Ok(removed)
    }

    /// Delete by id
    pub fn delete(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let txn = self
            .storage
            .ledger
            .delete_by_id(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        self.storage.log_delete(id, &txn);
        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::models::CategoryKind;
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = LedgerStore::open(temp_dir.path().join("transactions.csv"), Catalog::default());
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::with_ledger(ledger, Some(audit));
        (temp_dir, storage)
    }

    fn validation_message(input: &TransactionInput) -> String {
        match build_transaction(&Catalog::default(), input) {
            Err(LedgerError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_valid_transaction() {
        let input = TransactionInput::new(" 1200,50 ", "Salary", "2025-12-26")
            .with_description("  December  ");
        let txn = build_transaction(&Catalog::default(), &input).unwrap();

        assert_eq!(txn.amount, Money::from_cents(120050));
        assert_eq!(txn.category.kind, CategoryKind::Income);
        assert_eq!(txn.date, "2025-12-26");
        assert_eq!(txn.description, "December");
    }

    #[test]
    fn test_required_fields() {
        assert!(validation_message(&TransactionInput::new("", "Salary", "2025-01-01"))
            .contains("required"));
        assert!(validation_message(&TransactionInput::new("10", " ", "2025-01-01"))
            .contains("required"));
        assert!(validation_message(&TransactionInput::new("10", "Salary", ""))
            .contains("required"));
    }

    #[test]
    fn test_amount_rules() {
        assert!(validation_message(&TransactionInput::new("ten", "Salary", "2025-01-01"))
            .contains("Invalid amount"));
        assert!(validation_message(&TransactionInput::new("0", "Salary", "2025-01-01"))
            .contains("greater than 0"));
        assert!(validation_message(&TransactionInput::new("-5", "Salary", "2025-01-01"))
            .contains("greater than 0"));
    }

    #[test]
    fn test_date_rules() {
        assert!(validation_message(&TransactionInput::new("5", "Salary", "26.12.2025"))
            .contains("Invalid date"));
        assert!(validation_message(&TransactionInput::new("5", "Salary", "2025-02-30"))
            .contains("Invalid date"));
    }

    #[test]
    fn test_unknown_category() {
        let input = TransactionInput::new("5", "Rent", "2025-01-01");
        let err = build_transaction(&Catalog::default(), &input).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("'Rent' is not in the catalog"));
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, mut storage) = create_test_storage();

        let input = TransactionInput::new("40", "Groceries", "2025-01-02");
        let (id, txn) = TransactionService::new(&mut storage).create(&input).unwrap();

        assert_eq!(storage.ledger.len(), 1);
        assert_eq!(storage.ledger.get(0).unwrap().id, id);
        assert_eq!(txn.amount, Money::from_cents(4000));

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, id.to_string());
    }

    #[test]
    fn test_create_invalid_leaves_ledger_untouched() {
        let (_temp_dir, mut storage) = create_test_storage();

        let input = TransactionInput::new("abc", "Groceries", "2025-01-02");
        assert!(TransactionService::new(&mut storage).create(&input).is_err());

        assert!(storage.ledger.is_empty());
        assert!(storage.audit().unwrap().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_at() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        service.create(&TransactionInput::new("1", "Salary", "2025-01-01")).unwrap();
        service.create(&TransactionInput::new("2", "Salary", "2025-01-02")).unwrap();

        let removed = service.delete_at(0).unwrap().unwrap();
        assert_eq!(removed.amount, Money::from_cents(100));
        assert_eq!(service.delete_at(5).unwrap(), None);

        assert_eq!(storage.ledger.len(), 1);
        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].operation, Operation::Delete);
    }

    #[test]
    fn test_delete_by_id() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let (id, _) = service.create(&TransactionInput::new("1", "Salary", "2025-01-01")).unwrap();
        service.delete(id).unwrap();

        let err = service.delete(id).unwrap_err();
        assert!(err.is_not_found());
    }
}
