use anyhow::{Context, Result};
use shared::{Month, Transaction};
use std::path::Path;
use std::sync::Arc;

/// Sample dataset compiled into the binary
const BUNDLED_SEED: &str = include_str!("../data/seed.json");

/// Read-only, in-memory transaction dataset shared by all handlers
#[derive(Clone, Debug)]
pub struct TransactionStore {
    transactions: Arc<Vec<Transaction>>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(transactions),
        }
    }

    /// Parse a JSON array of transaction records
    pub fn from_json(json: &str) -> Result<Self> {
        let transactions: Vec<Transaction> =
            serde_json::from_str(json).context("Seed data is not a valid transaction array")?;
        Ok(Self::new(transactions))
    }

    /// Load from `path` if given, otherwise from the bundled sample data
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read seed file {}", path.display()))?;
                Self::from_json(&json)
            }
            None => Self::from_json(BUNDLED_SEED),
        }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Records sold in `month` of any year
    pub fn in_month(&self, month: Month) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |transaction| transaction.sale_month() == month)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_seed_loads() {
        let store = TransactionStore::load(None).unwrap();
        assert_eq!(store.len(), 16);
        assert_eq!(store.all()[0].id, "1");
    }

    #[test]
    fn test_in_month_ignores_year() {
        let store = TransactionStore::load(None).unwrap();
        let march: Vec<_> = store.in_month(Month::March).map(|t| t.id.as_str()).collect();
        assert_eq!(march, vec!["1", "2", "3", "4", "5", "12", "14", "16"]);
        assert_eq!(store.in_month(Month::February).count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("dashboard-seed-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"_id":"a1","title":"Lamp","description":"Desk lamp","price":40,"category":"home","dateOfSale":"2022-06-01T08:00:00Z","sold":true}}]"#
        )
        .unwrap();

        let store = TransactionStore::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 1);
        assert_eq!(store.in_month(Month::June).count(), 1);
    }

    #[test]
    fn test_invalid_seed_is_an_error() {
        assert!(TransactionStore::from_json("{\"not\": \"an array\"}").is_err());
        assert!(TransactionStore::load(Some(Path::new("/definitely/missing/seed.json"))).is_err());
    }
}
