use shared::Statistics;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatisticsPanelProps {
    /// `None` until the first successful fetch
    pub statistics: Option<Statistics>,
}

/// Label/value lines for the panel; values are blank while nothing has loaded
pub fn statistics_lines(statistics: Option<&Statistics>) -> [(&'static str, String); 3] {
    match statistics {
        Some(stats) => [
            ("Total Sales", stats.total_sales.to_string()),
            ("Total Sold", stats.total_sold.to_string()),
            ("Total Not Sold", stats.total_not_sold.to_string()),
        ],
        None => [
            ("Total Sales", String::new()),
            ("Total Sold", String::new()),
            ("Total Not Sold", String::new()),
        ],
    }
}

#[function_component(StatisticsPanel)]
pub fn statistics_panel(props: &StatisticsPanelProps) -> Html {
    html! {
        <section class="statistics">
            <h2>{"Statistics"}</h2>
            {for statistics_lines(props.statistics.as_ref()).into_iter().map(|(label, value)| html! {
                <p>{format!("{}: {}", label, value)}</p>
            })}
        </section>
    }
}
