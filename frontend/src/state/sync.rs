//! # Synchronization Trigger
//!
//! Decides which fetches run in response to a user action.
//!
//! - A month change re-runs all four fetches, once per distinct month value,
//!   including the first month seen on mount.
//! - The Search button re-runs only the transaction fetch. The request always
//!   carries the fixed dashboard query, so the typed search text is never sent.
//!
//! Every batch is stamped with a new epoch. The view state keeps the latest
//! epoch issued per slice and drops completions from older batches, so a slow
//! response for a previous month cannot overwrite fresher data.

use shared::{
    ChartData, Endpoint, Month, MonthQuery, Statistics, Transaction, TransactionQuery,
};

use crate::services::api::FetchError;

/// Monotonically increasing batch number
pub type Epoch = u64;

/// One independently replaced piece of fetched state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Transactions,
    Statistics,
    BarChart,
    PieChart,
}

impl Slice {
    pub const ALL: [Slice; 4] = [
        Slice::Transactions,
        Slice::Statistics,
        Slice::BarChart,
        Slice::PieChart,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Slice::Transactions => Endpoint::Transactions,
            Slice::Statistics => Endpoint::Statistics,
            Slice::BarChart => Endpoint::BarChart,
            Slice::PieChart => Endpoint::PieChart,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Marks a slice as having a request in flight for a given batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub slice: Slice,
    pub epoch: Epoch,
}

/// A single outbound GET, described independently of the HTTP client
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    Transactions(TransactionQuery),
    Statistics(MonthQuery),
    BarChart(MonthQuery),
    PieChart(MonthQuery),
}

impl FetchRequest {
    pub fn slice(&self) -> Slice {
        match self {
            FetchRequest::Transactions(_) => Slice::Transactions,
            FetchRequest::Statistics(_) => Slice::Statistics,
            FetchRequest::BarChart(_) => Slice::BarChart,
            FetchRequest::PieChart(_) => Slice::PieChart,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.slice().endpoint()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            FetchRequest::Transactions(query) => query.query_pairs(),
            FetchRequest::Statistics(query)
            | FetchRequest::BarChart(query)
            | FetchRequest::PieChart(query) => query.query_pairs(),
        }
    }
}

/// Result of one fetch, tagged with the slice it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Transactions(Result<Vec<Transaction>, FetchError>),
    Statistics(Result<Statistics, FetchError>),
    BarChart(Result<ChartData, FetchError>),
    PieChart(Result<ChartData, FetchError>),
}

impl FetchOutcome {
    pub fn slice(&self) -> Slice {
        match self {
            FetchOutcome::Transactions(_) => Slice::Transactions,
            FetchOutcome::Statistics(_) => Slice::Statistics,
            FetchOutcome::BarChart(_) => Slice::BarChart,
            FetchOutcome::PieChart(_) => Slice::PieChart,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Transactions(result) => result.as_ref().err(),
            FetchOutcome::Statistics(result) => result.as_ref().err(),
            FetchOutcome::BarChart(result) => result.as_ref().err(),
            FetchOutcome::PieChart(result) => result.as_ref().err(),
        }
    }
}

/// Requests issued together by one trigger
#[derive(Debug, Clone, PartialEq)]
pub struct FetchBatch {
    pub epoch: Epoch,
    pub requests: Vec<FetchRequest>,
}

impl FetchBatch {
    pub fn tickets(&self) -> Vec<Ticket> {
        self.requests
            .iter()
            .map(|request| Ticket {
                slice: request.slice(),
                epoch: self.epoch,
            })
            .collect()
    }
}

/// Turns triggers into request batches
#[derive(Debug, Default)]
pub struct SyncTrigger {
    last_epoch: Epoch,
    last_month: Option<Month>,
}

impl SyncTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four fetches for `month`, or `None` if that month is already current
    pub fn month_changed(&mut self, month: Month) -> Option<FetchBatch> {
        if self.last_month == Some(month) {
            return None;
        }
        self.last_month = Some(month);

        let query = MonthQuery { month };
        Some(FetchBatch {
            epoch: self.next_epoch(),
            requests: vec![
                FetchRequest::Transactions(TransactionQuery::dashboard()),
                FetchRequest::Statistics(query),
                FetchRequest::BarChart(query),
                FetchRequest::PieChart(query),
            ],
        })
    }

    /// Transaction fetch only, with the fixed dashboard query
    pub fn search_requested(&mut self) -> FetchBatch {
        FetchBatch {
            epoch: self.next_epoch(),
            requests: vec![FetchRequest::Transactions(TransactionQuery::dashboard())],
        }
    }

    fn next_epoch(&mut self) -> Epoch {
        self.last_epoch += 1;
        self.last_epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_transaction_pairs() -> Vec<(&'static str, String)> {
        vec![
            ("search", String::new()),
            ("page", "1".to_string()),
            ("perPage", "10".to_string()),
        ]
    }

    #[test]
    fn test_every_month_issues_four_requests() {
        for month in Month::ALL {
            let mut trigger = SyncTrigger::new();
            let batch = trigger.month_changed(month).expect("first month always fetches");

            assert_eq!(batch.requests.len(), 4);
            let endpoints: Vec<_> = batch.requests.iter().map(FetchRequest::endpoint).collect();
            assert_eq!(
                endpoints,
                vec![
                    Endpoint::Transactions,
                    Endpoint::Statistics,
                    Endpoint::BarChart,
                    Endpoint::PieChart,
                ]
            );

            for request in &batch.requests[1..] {
                assert_eq!(request.query_pairs(), vec![("month", month.name().to_string())]);
            }
            assert_eq!(batch.requests[0].query_pairs(), fixed_transaction_pairs());
        }
    }

    #[test]
    fn test_transaction_request_is_always_fixed() {
        let mut trigger = SyncTrigger::new();
        let month_batch = trigger.month_changed(Month::May).unwrap();
        let search_batch = trigger.search_requested();

        assert_eq!(month_batch.requests[0].query_pairs(), fixed_transaction_pairs());
        assert_eq!(search_batch.requests.len(), 1);
        assert_eq!(search_batch.requests[0].query_pairs(), fixed_transaction_pairs());
        assert_eq!(search_batch.requests[0], month_batch.requests[0]);
    }

    #[test]
    fn test_mount_with_default_month() {
        let mut trigger = SyncTrigger::new();
        let batch = trigger.month_changed(Month::default()).unwrap();

        assert_eq!(batch.epoch, 1);
        let month_scoped: Vec<_> = batch.requests[1..].iter().map(FetchRequest::query_pairs).collect();
        assert_eq!(month_scoped, vec![vec![("month", "March".to_string())]; 3]);
    }

    #[test]
    fn test_month_change_fires_once_per_distinct_value() {
        let mut trigger = SyncTrigger::new();
        assert!(trigger.month_changed(Month::March).is_some());

        let july = trigger.month_changed(Month::July).expect("new month fetches");
        assert!(july.requests[1..]
            .iter()
            .all(|request| request.query_pairs() == vec![("month", "July".to_string())]));

        assert!(trigger.month_changed(Month::July).is_none());
        assert!(trigger.month_changed(Month::March).is_some());
    }

    #[test]
    fn test_epochs_increase_across_triggers() {
        let mut trigger = SyncTrigger::new();
        let first = trigger.month_changed(Month::March).unwrap();
        let second = trigger.search_requested();
        let third = trigger.month_changed(Month::April).unwrap();

        assert!(first.epoch < second.epoch);
        assert!(second.epoch < third.epoch);
    }

    #[test]
    fn test_batch_tickets_share_epoch() {
        let mut trigger = SyncTrigger::new();
        let batch = trigger.month_changed(Month::June).unwrap();
        let tickets = batch.tickets();

        assert_eq!(tickets.len(), 4);
        assert!(tickets.iter().all(|ticket| ticket.epoch == batch.epoch));
        let slices: Vec<_> = tickets.iter().map(|ticket| ticket.slice).collect();
        assert_eq!(slices, Slice::ALL.to_vec());
    }

    #[test]
    fn test_outcome_reports_error() {
        let err = FetchError::new(Endpoint::Statistics, "Network error: offline");
        let failed = FetchOutcome::Statistics(Err(err.clone()));
        let ok = FetchOutcome::Statistics(Ok(Statistics::default()));

        assert_eq!(failed.slice(), Slice::Statistics);
        assert_eq!(failed.error(), Some(&err));
        assert_eq!(ok.error(), None);
    }
}
