//! # Dashboard State
//!
//! The single state container owned by the dashboard page. Every field is
//! replaced wholesale; fetched slices are never merged with older data, and a
//! failed fetch leaves the previous value in place.

use std::rc::Rc;

use shared::{ChartData, Month, Statistics, Transaction};
use yew::Reducible;

use super::sync::{Epoch, FetchOutcome, Slice, Ticket};

/// Latest epoch issued for each slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFence {
    latest: [Option<Epoch>; Slice::ALL.len()],
}

impl RequestFence {
    pub fn issue(&mut self, ticket: Ticket) {
        let slot = &mut self.latest[ticket.slice.index()];
        if slot.map_or(true, |latest| ticket.epoch > latest) {
            *slot = Some(ticket.epoch);
        }
    }

    pub fn is_current(&self, slice: Slice, epoch: Epoch) -> bool {
        self.latest[slice.index()] == Some(epoch)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub month: Month,
    /// Typed search text; stored for the input only, never sent
    pub search: String,
    pub transactions: Vec<Transaction>,
    pub statistics: Option<Statistics>,
    pub bar_chart: Option<ChartData>,
    pub pie_chart: Option<ChartData>,
    /// True while the latest transaction fetch is outstanding
    pub loading: bool,
    fence: RequestFence,
}

pub enum DashboardAction {
    SelectMonth(Month),
    EditSearch(String),
    /// Requests were sent for these slices
    Issued(Vec<Ticket>),
    Completed { epoch: Epoch, outcome: FetchOutcome },
}

impl DashboardState {
    /// Apply an action in place; returns whether anything changed
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        match action {
            DashboardAction::SelectMonth(month) => {
                if self.month == month {
                    return false;
                }
                self.month = month;
                true
            }
            DashboardAction::EditSearch(search) => {
                self.search = search;
                true
            }
            DashboardAction::Issued(tickets) => {
                for ticket in tickets {
                    self.fence.issue(ticket);
                    if ticket.slice == Slice::Transactions {
                        self.loading = true;
                    }
                }
                true
            }
            DashboardAction::Completed { epoch, outcome } => self.complete(epoch, outcome),
        }
    }

    fn complete(&mut self, epoch: Epoch, outcome: FetchOutcome) -> bool {
        if !self.fence.is_current(outcome.slice(), epoch) {
            return false;
        }

        match outcome {
            FetchOutcome::Transactions(result) => {
                if let Ok(transactions) = result {
                    self.transactions = transactions;
                }
                self.loading = false;
                true
            }
            FetchOutcome::Statistics(Ok(statistics)) => {
                self.statistics = Some(statistics);
                true
            }
            FetchOutcome::BarChart(Ok(chart)) => {
                self.bar_chart = Some(chart);
                true
            }
            FetchOutcome::PieChart(Ok(chart)) => {
                self.pie_chart = Some(chart);
                true
            }
            FetchOutcome::Statistics(Err(_))
            | FetchOutcome::BarChart(Err(_))
            | FetchOutcome::PieChart(Err(_)) => false,
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
