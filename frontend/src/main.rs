use wasm_bindgen::JsValue;
use yew::prelude::*;

mod components;
mod dom;
mod hooks;
mod leaflet;
mod services;

use components::{Header, MapPanel, ReservationTable, TableKind, WeekNavigator};
use hooks::{use_dashboard, use_status_updates};
use services::api::ApiClient;
use services::date_utils::today;
use services::logging::Logger;

/// Set on the mount root once the app has been attached to it
const MOUNTED_ATTR: &str = "data-mounted";

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::with_config(dom::dashboard_config()));
    let dashboard = use_dashboard(&api_client);
    let status_actions = use_status_updates(&api_client, dashboard.actions.dispatcher.clone());

    let state = &dashboard.state;
    let config = api_client.config();

    html! {
        <>
            <Header />

            <main class="main">
                <ReservationTable
                    kind={TableKind::Arrivals}
                    reservations={state.arrivals.clone()}
                    statuses={state.statuses.clone()}
                    locale={config.locale}
                    on_select={status_actions.on_select.clone()}
                    on_commit={status_actions.on_commit.clone()}
                />
                <ReservationTable
                    kind={TableKind::Departures}
                    reservations={state.departures.clone()}
                    statuses={state.statuses.clone()}
                    locale={config.locale}
                    on_select={status_actions.on_select.clone()}
                    on_commit={status_actions.on_commit.clone()}
                />
            </main>

            <WeekNavigator
                week={state.week}
                today={today()}
                locale={config.locale}
                loading={state.loading}
                on_change_week={dashboard.actions.change_week.clone()}
            />

            <MapPanel config={config.map.clone()} />
        </>
    }
}

/// Attach the app to the mount root. Later calls find the root already
/// mounted and leave it alone; returns whether this call mounted it.
fn render_shell() -> Result<bool, JsValue> {
    let root = dom::ensure_mount_root()?;
    if root.has_attribute(MOUNTED_ATTR) {
        return Ok(false);
    }

    root.set_attribute(MOUNTED_ATTR, "")?;
    yew::Renderer::<App>::with_root(root).render();
    Ok(true)
}

fn main() {
    Logger::info_with_component("app", "Application démarrée ...");

    match render_shell() {
        Ok(true) => {}
        Ok(false) => Logger::warn_with_component("app", "Dashboard already mounted"),
        Err(e) => {
            gloo::console::error!("Failed to prepare the dashboard root:", e);
        }
    }
}
