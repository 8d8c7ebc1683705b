use crate::db::TransactionStore;
use shared::{ChartData, Month, Statistics, Transaction, TransactionQuery};
use tracing::debug;

/// Labels of the price-range buckets, in chart order.
///
/// Each bucket covers `(lower, upper]` in steps of 100, so prices with cents
/// never fall between two buckets. The last one is open-ended.
pub const PRICE_RANGE_LABELS: [&str; 10] = [
    "0-100", "101-200", "201-300", "301-400", "401-500", "501-600", "601-700", "701-800",
    "801-900", "901-above",
];

const BAR_DATASET_LABEL: &str = "Number of Items";
const PIE_DATASET_LABEL: &str = "Items per Category";

/// Index into `PRICE_RANGE_LABELS` for a price
pub fn price_bucket(price: f64) -> usize {
    if price <= 100.0 {
        return 0;
    }
    let bucket = (price / 100.0).ceil() as usize - 1;
    bucket.min(PRICE_RANGE_LABELS.len() - 1)
}

#[derive(Clone, Debug)]
pub struct TransactionService {
    store: TransactionStore,
}

impl TransactionService {
    pub fn new(store: TransactionStore) -> Self {
        Self { store }
    }

    /// One page of transactions matching the search text across all months
    pub fn list_transactions(&self, query: &TransactionQuery) -> Vec<Transaction> {
        let search = query.search.trim().to_lowercase();
        let price = search.parse::<f64>().ok();

        let page: Vec<Transaction> = self
            .store
            .all()
            .iter()
            .filter(|transaction| {
                search.is_empty()
                    || transaction.title.to_lowercase().contains(&search)
                    || transaction.description.to_lowercase().contains(&search)
                    || price.is_some_and(|price| transaction.price == price)
            })
            .skip(query.offset())
            .take(query.per_page as usize)
            .cloned()
            .collect();

        debug!(
            "Listing page {} ({} per page, search {:?}): {} transactions",
            query.page,
            query.per_page,
            query.search,
            page.len()
        );
        page
    }

    pub fn statistics(&self, month: Month) -> Statistics {
        self.store
            .in_month(month)
            .fold(Statistics::default(), |mut stats, transaction| {
                if transaction.sold {
                    stats.total_sales += transaction.price;
                    stats.total_sold += 1;
                } else {
                    stats.total_not_sold += 1;
                }
                stats
            })
    }

    /// Item counts per price range; every range is present, even when empty
    pub fn price_range_chart(&self, month: Month) -> ChartData {
        let mut counts = [0u64; PRICE_RANGE_LABELS.len()];
        for transaction in self.store.in_month(month) {
            counts[price_bucket(transaction.price)] += 1;
        }

        let points = PRICE_RANGE_LABELS
            .iter()
            .zip(counts)
            .map(|(label, count)| (label.to_string(), count as f64))
            .collect();
        ChartData::new(BAR_DATASET_LABEL, points)
    }

    /// Item counts per category, in order of first appearance
    pub fn category_chart(&self, month: Month) -> ChartData {
        let mut points: Vec<(String, f64)> = Vec::new();
        for transaction in self.store.in_month(month) {
            match points.iter_mut().find(|(category, _)| *category == transaction.category) {
                Some((_, count)) => *count += 1.0,
                None => points.push((transaction.category.clone(), 1.0)),
            }
        }
        ChartData::new(PIE_DATASET_LABEL, points)
    }
}
