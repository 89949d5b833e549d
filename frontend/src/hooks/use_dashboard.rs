use std::rc::Rc;

use shared::{
    load_reservations, ApiError, DashboardState, Direction, LoadRequest, LodgingId,
    ReservationStatus, StatusUpdate, WeekPartition,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

pub enum DashboardAction {
    ChangeWeek(Direction),
    Loaded(LoadRequest, WeekPartition),
    LoadFailed(LoadRequest, ApiError),
    SelectStatus(Option<LodgingId>, ReservationStatus),
    ConfirmStatus(StatusUpdate),
}

/// Yew wrapper around the dashboard state so it can be driven by a reducer
#[derive(Clone, PartialEq)]
pub struct DashboardStore(pub DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.0.clone();
        let next = match action {
            DashboardAction::ChangeWeek(direction) => state.change_week(direction),
            DashboardAction::Loaded(request, partition) => {
                if !state.is_current(request) {
                    Logger::debug_with_component(
                        "loader",
                        &format!("Ignoring superseded load #{} for week {}", request.id, request.week),
                    );
                    return self;
                }
                let summary = if partition.is_empty() {
                    format!("Week {}: no arrivals or departures", request.week)
                } else {
                    format!(
                        "Week {}: {} arrivals, {} departures",
                        request.week,
                        partition.arrivals.len(),
                        partition.departures.len()
                    )
                };
                Logger::info_with_component("loader", &summary);
                state.apply_load(request, partition)
            }
            DashboardAction::LoadFailed(request, error) => {
                Logger::error_with_component(
                    "loader",
                    &format!("Failed to load reservations for week {}: {}", request.week, error),
                );
                state.fail_load(request)
            }
            DashboardAction::SelectStatus(lodging_id, status) => {
                state.select_status(lodging_id, status)
            }
            DashboardAction::ConfirmStatus(update) => state.confirm_status(&update),
        };
        Rc::new(DashboardStore(next))
    }
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub change_week: Callback<Direction>,
    pub dispatcher: UseReducerDispatcher<DashboardStore>,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let store = use_reducer(|| DashboardStore(DashboardState::starting_at(today())));

    let change_week = {
        let dispatcher = store.dispatcher();
        use_callback((), move |direction: Direction, _| {
            dispatcher.dispatch(DashboardAction::ChangeWeek(direction));
        })
    };

    // Every new request (start or navigation) issues exactly one fetch
    use_effect_with(store.0.pending_request(), {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        move |request: &LoadRequest| {
            let request = *request;
            spawn_local(async move {
                match load_reservations(&api_client, request.week, today()).await {
                    Ok(partition) => dispatcher.dispatch(DashboardAction::Loaded(request, partition)),
                    Err(e) => dispatcher.dispatch(DashboardAction::LoadFailed(request, e)),
                }
            });
            || ()
        }
    });

    let actions = UseDashboardActions {
        change_week,
        dispatcher: store.dispatcher(),
    };

    UseDashboardResult {
        state: store.0.clone(),
        actions,
    }
}
