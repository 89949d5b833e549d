use shared::{submit_status, StatusOutcome, StatusSelection, StatusUpdateError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_dashboard::{DashboardAction, DashboardStore};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct UseStatusUpdatesActions {
    /// Dropdown changed: remember the pick, then try to send it
    pub on_select: Callback<StatusSelection>,
    /// "Mettre à jour" clicked: send the row's current pick
    pub on_commit: Callback<StatusSelection>,
}

#[hook]
pub fn use_status_updates(
    api_client: &ApiClient,
    dispatcher: UseReducerDispatcher<DashboardStore>,
) -> UseStatusUpdatesActions {
    let on_commit = {
        let api_client = api_client.clone();
        let dispatcher = dispatcher.clone();

        use_callback((), move |selection: StatusSelection, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                match submit_status(&api_client, &selection).await {
                    Ok(StatusOutcome::Skipped) => {
                        Logger::info_with_component(
                            "status",
                            "No update sent: status left on \"pending\"",
                        );
                    }
                    Ok(StatusOutcome::Confirmed(update)) => {
                        Logger::info_with_component(
                            "status",
                            &format!("Lodging {} is now {}", update.lodging_id, update.status),
                        );
                        dispatcher.dispatch(DashboardAction::ConfirmStatus(update));
                    }
                    Err(StatusUpdateError::MissingLodgingId) => {
                        Logger::error_with_component("status", "Lodging id not found for this row");
                    }
                    Err(e) => {
                        Logger::error_with_component("status", &e.to_string());
                    }
                }
            });
        })
    };

    let on_select = {
        let on_commit = on_commit.clone();
        use_callback((), move |selection: StatusSelection, _| {
            dispatcher.dispatch(DashboardAction::SelectStatus(
                selection.lodging_id.clone(),
                selection.status,
            ));
            on_commit.emit(selection);
        })
    };

    UseStatusUpdatesActions {
        on_select,
        on_commit,
    }
}
