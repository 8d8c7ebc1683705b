use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page requested by the dashboard's transaction list
pub const DEFAULT_PAGE: u32 = 1;
/// Rows per page requested by the dashboard's transaction list
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A single sale record, owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Backend identifier; accepted as `_id` or `id`, string or number
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// RFC 3339 timestamp, kept with its original offset
    pub date_of_sale: DateTime<FixedOffset>,
    pub sold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Transaction {
    /// Calendar month the sale happened in (offset-local)
    pub fn sale_month(&self) -> Month {
        // chrono guarantees 1..=12
        Month::from_number(self.date_of_sale.month()).unwrap_or_default()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Aggregated totals for one month, computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sales: f64,
    pub total_sold: u64,
    pub total_not_sold: u64,
}

/// Chart payload in the label/dataset shape used by Chart.js.
///
/// The dashboard never interprets the numbers; it only draws them. Labels may
/// be any JSON scalar, points may be `null`, and fields it does not know about
/// are kept in `extra` so the payload round-trips intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<serde_json::Value>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<Option<f64>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Display text of a chart label; strings are shown without quotes
pub fn label_text(label: &serde_json::Value) -> String {
    match label {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl ChartData {
    pub fn new(dataset_label: &str, points: Vec<(String, f64)>) -> Self {
        let (labels, data) = points
            .into_iter()
            .map(|(label, value)| (serde_json::Value::String(label), Some(value)))
            .unzip();
        Self {
            labels,
            datasets: vec![ChartDataset {
                label: Some(dataset_label.to_string()),
                data,
                extra: serde_json::Map::new(),
            }],
            extra: serde_json::Map::new(),
        }
    }

    /// Label of the first dataset, if it has one
    pub fn dataset_label(&self) -> Option<&str> {
        self.datasets.first().and_then(|dataset| dataset.label.as_deref())
    }

    /// Label/value pairs of the first dataset. `null` points and labels
    /// without a value are skipped.
    pub fn points(&self) -> Vec<(String, f64)> {
        match self.datasets.first() {
            Some(dataset) => self
                .labels
                .iter()
                .zip(dataset.data.iter())
                .filter_map(|(label, value)| value.map(|value| (label_text(label), value)))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

/// The twelve selectable months, serialized by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    #[default]
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 1-based month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Month::ALL
            .iter()
            .find(|month| month.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseMonthError(pub String);

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month: '{}'", self.0)
    }
}

impl std::error::Error for ParseMonthError {}

/// Query parameters of `GET /api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl TransactionQuery {
    /// The fixed request the dashboard sends: empty search, first page of ten.
    pub fn dashboard() -> Self {
        Self {
            search: String::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.search.clone()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }

    /// Number of records skipped before this page; page 0 is treated as page 1
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.per_page as usize
    }
}

/// Query parameters of the month-scoped endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthQuery {
    pub month: Month,
}

impl MonthQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("month", self.month.name().to_string())]
    }
}

/// The four read endpoints the dashboard consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Transactions,
    Statistics,
    BarChart,
    PieChart,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Transactions => "/api/transactions",
            Endpoint::Statistics => "/api/statistics",
            Endpoint::BarChart => "/api/bar-chart",
            Endpoint::PieChart => "/api/pie-chart",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
