//! Category and Catalog models
//!
//! A category names a bucket of income or spending. The catalog is the closed,
//! ordered set of categories the ledger knows about; it is built once at
//! startup and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Whether a category counts toward income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    /// Label written to the `Type` column of the ledger file
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Sign applied to an amount of this kind in aggregates
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Income => 1,
            Self::Expense => -1,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An income or expense category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within a catalog
    pub name: String,

    /// Income or expense
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn income(name: impl Into<String>) -> Self {
        Self::new(name, CategoryKind::Income)
    }

    pub fn expense(name: impl Into<String>) -> Self {
        Self::new(name, CategoryKind::Expense)
    }

    pub fn is_income(&self) -> bool {
        self.kind == CategoryKind::Income
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Seed categories, in display order
pub const DEFAULT_CATEGORIES: &[(&str, CategoryKind)] = &[
    ("Salary", CategoryKind::Income),
    ("Investments", CategoryKind::Income),
    ("Groceries", CategoryKind::Expense),
    ("Transport", CategoryKind::Expense),
    ("Entertainment", CategoryKind::Expense),
];

/// The fixed, ordered set of known categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate names
    pub fn new(categories: Vec<Category>) -> Result<Self, CategoryValidationError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// Exact, case-sensitive lookup by name
    pub fn by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Position of a category in display order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let categories: Vec<Category> = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, kind)| Category::new(*name, *kind))
            .collect();
        debug_assert!(validate(&categories).is_ok(), "seed catalog is invalid");
        Self { categories }
    }
}

fn validate(categories: &[Category]) -> Result<(), CategoryValidationError> {
    let mut seen = HashSet::new();
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if !seen.insert(category.name.as_str()) {
            return Err(CategoryValidationError::DuplicateName(
                category.name.clone(),
            ));
        }
    }
    Ok(())
}

/// Validation errors for catalogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    DuplicateName(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::DuplicateName(name) => write!(f, "Duplicate category name: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 5);

        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Salary", "Investments", "Groceries", "Transport", "Entertainment"]
        );

        assert_eq!(catalog.by_name("Salary").unwrap().kind, CategoryKind::Income);
        assert_eq!(catalog.by_name("Transport").unwrap().kind, CategoryKind::Expense);
    }

    #[test]
    fn test_default_catalog_passes_validation() {
        let catalog = Catalog::default();
        let categories: Vec<_> = catalog.iter().cloned().collect();
        assert_eq!(validate(&categories), Ok(()));
        assert_eq!(Catalog::new(categories), Ok(catalog));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::default();
        assert!(catalog.by_name("salary").is_none());
        assert!(catalog.by_name("Salary ").is_none());
        assert!(catalog.by_name("Rent").is_none());
    }

    #[test]
    fn test_position() {
        let catalog = Catalog::default();
        assert_eq!(catalog.position("Groceries"), Some(2));
        assert_eq!(catalog.position("Rent"), None);
        assert_eq!(catalog.get(2).unwrap().name, "Groceries");
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = Catalog::new(vec![Category::income("Salary"), Category::expense("Salary")]);
        assert_eq!(
            result,
            Err(CategoryValidationError::DuplicateName("Salary".into()))
        );
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = Catalog::new(vec![Category::income("  ")]);
        assert_eq!(result, Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_kind_label_and_sign() {
        assert_eq!(CategoryKind::Income.label(), "Income");
        assert_eq!(CategoryKind::Expense.to_string(), "Expense");
        assert_eq!(CategoryKind::Income.sign(), 1);
        assert_eq!(CategoryKind::Expense.sign(), -1);
    }
}
