use shared::Month;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};
use crate::state::{DashboardAction, DashboardState, FetchBatch, SyncTrigger};

const COMPONENT: &str = "Dashboard";

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone)]
pub struct UseDashboardActions {
    pub select_month: Callback<Month>,
    pub edit_search: Callback<String>,
    pub search: Callback<()>,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let state = use_reducer(DashboardState::default);
    let trigger = use_mut_ref(SyncTrigger::new);

    // Issue a batch: record tickets first, then fire each request on its own
    let run_batch = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_callback((), move |batch: FetchBatch, _| {
            let epoch = batch.epoch;
            dispatcher.dispatch(DashboardAction::Issued(batch.tickets()));

            for request in batch.requests {
                let api_client = api_client.clone();
                let dispatcher = dispatcher.clone();

                spawn_local(async move {
                    let outcome = api_client.execute(&request).await;
                    if let Some(error) = outcome.error() {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching data: {}", error));
                    }
                    dispatcher.dispatch(DashboardAction::Completed { epoch, outcome });
                });
            }
        })
    };

    // Re-fetch everything whenever the selected month changes, including on mount
    {
        let trigger = trigger.clone();
        let run_batch = run_batch.clone();
        use_effect_with(state.month, move |month| {
            let batch = trigger.borrow_mut().month_changed(*month);
            if let Some(batch) = batch {
                Logger::debug_with_component(COMPONENT, &format!("Loading dashboard for {}", month));
                run_batch.emit(batch);
            }
            || ()
        });
    }

    let select_month = {
        let dispatcher = state.dispatcher();
        use_callback((), move |month: Month, _| {
            dispatcher.dispatch(DashboardAction::SelectMonth(month));
        })
    };

    let edit_search = {
        let dispatcher = state.dispatcher();
        use_callback((), move |search: String, _| {
            dispatcher.dispatch(DashboardAction::EditSearch(search));
        })
    };

    // The typed text stays in state; the request uses the fixed dashboard query
    let search = {
        let trigger = trigger.clone();
        let run_batch = run_batch.clone();
        use_callback((), move |_: (), _| {
            let batch = trigger.borrow_mut().search_requested();
            Logger::info_with_component(COMPONENT, "Refreshing transactions");
            run_batch.emit(batch);
        })
    };

    UseDashboardResult {
        state: (*state).clone(),
        actions: UseDashboardActions {
            select_month,
            edit_search,
            search,
        },
    }
}
