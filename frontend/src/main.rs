use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::{ChartKind, DatasetChart, Filters, Header, StatisticsPanel, TransactionTable};
use hooks::use_dashboard::use_dashboard;
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let dashboard = use_dashboard(&api_client);
    let state = dashboard.state;
    let actions = dashboard.actions;

    html! {
        <div class="container">
            <Header title="Transaction Dashboard" />

            <Filters
                month={state.month}
                search={state.search.clone()}
                on_month_change={actions.select_month.clone()}
                on_search_input={actions.edit_search.clone()}
                on_search={actions.search.clone()}
            />

            <TransactionTable
                transactions={state.transactions.clone()}
                loading={state.loading}
            />

            <StatisticsPanel statistics={state.statistics.clone()} />

            <DatasetChart
                title="Price Range Distribution"
                kind={ChartKind::Bar}
                data={state.bar_chart.clone()}
            />

            <DatasetChart
                title="Category Distribution"
                kind={ChartKind::Pie}
                data={state.pie_chart.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
