use shared::{DisplayLocale, Reservation, ReservationStatus, StatusBoard, StatusSelection};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Which of the two weekly lists a table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Arrivals,
    Departures,
}

impl TableKind {
    pub fn title(self) -> &'static str {
        match self {
            TableKind::Arrivals => "Liste des arrivées",
            TableKind::Departures => "Liste des départs",
        }
    }

    /// Stable id of the table body
    pub fn body_id(self) -> &'static str {
        match self {
            TableKind::Arrivals => "liste-entry",
            TableKind::Departures => "liste-exit",
        }
    }

    /// The date the list is about comes first
    fn headers(self) -> [&'static str; 6] {
        let (first, second) = match self {
            TableKind::Arrivals => ("Date d'arrivée", "Date de départ"),
            TableKind::Departures => ("Date de départ", "Date d'arrivée"),
        };
        [first, second, "Nom", "Emplacement", "Disponibilité", "Actions"]
    }

    fn dates(self, reservation: &Reservation, locale: DisplayLocale) -> (String, String) {
        let start = locale.format_date(reservation.date_start);
        let end = locale.format_date(reservation.date_end);
        match self {
            TableKind::Arrivals => (start, end),
            TableKind::Departures => (end, start),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ReservationTableProps {
    pub kind: TableKind,
    pub reservations: Vec<Reservation>,
    pub statuses: StatusBoard,
    pub locale: DisplayLocale,
    pub on_select: Callback<StatusSelection>,
    pub on_commit: Callback<StatusSelection>,
}

#[function_component(ReservationTable)]
pub fn reservation_table(props: &ReservationTableProps) -> Html {
    let kind = props.kind;

    html! {
        <>
            <h2>{kind.title()}</h2>
            <table class="reservations-table">
                <thead>
                    <tr>
                        {for kind.headers().into_iter().map(|header| html! { <th>{header}</th> })}
                    </tr>
                </thead>
                <tbody id={kind.body_id()}>
                    {for props.reservations.iter().map(|reservation| {
                        html! {
                            <ReservationRow
                                key={reservation.id.to_string()}
                                kind={kind}
                                reservation={reservation.clone()}
                                status={props.statuses.status_for(reservation)}
                                locale={props.locale}
                                on_select={props.on_select.clone()}
                                on_commit={props.on_commit.clone()}
                            />
                        }
                    })}
                </tbody>
            </table>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ReservationRowProps {
    kind: TableKind,
    reservation: Reservation,
    /// Value the dropdown shows
    status: ReservationStatus,
    locale: DisplayLocale,
    on_select: Callback<StatusSelection>,
    on_commit: Callback<StatusSelection>,
}

/// Status shown by the row's dropdown, falling back to the board's value
/// when the element is not mounted
fn shown_status(select_ref: &NodeRef, fallback: ReservationStatus) -> ReservationStatus {
    select_ref
        .cast::<HtmlSelectElement>()
        .and_then(|select| ReservationStatus::from_wire(&select.value()))
        .unwrap_or(fallback)
}

#[function_component(ReservationRow)]
fn reservation_row(props: &ReservationRowProps) -> Html {
    let reservation = &props.reservation;
    let lodging_id = reservation.lodging_id().cloned();
    let data_id: Option<AttrValue> = lodging_id.as_ref().map(|id| AttrValue::from(id.to_string()));
    let (first_date, second_date) = props.kind.dates(reservation, props.locale);
    let select_ref = use_node_ref();

    // Browsers stop honouring `selected` once a dropdown has been touched,
    // so the value is pushed onto the element itself.
    {
        let select_ref = select_ref.clone();
        use_effect_with(props.status, move |status| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(status.as_str());
            }
            || ()
        });
    }

    let on_change = {
        let on_select = props.on_select.clone();
        let lodging_id = lodging_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = ReservationStatus::from_wire(&select.value()) {
                on_select.emit(StatusSelection {
                    lodging_id: lodging_id.clone(),
                    status,
                });
            }
        })
    };

    let on_click = {
        let on_commit = props.on_commit.clone();
        let select_ref = select_ref.clone();
        let fallback = props.status;
        Callback::from(move |_: MouseEvent| {
            on_commit.emit(StatusSelection {
                lodging_id: lodging_id.clone(),
                status: shown_status(&select_ref, fallback),
            });
        })
    };

    html! {
        <tr>
            <td class="date">{first_date}</td>
            <td class="date">{second_date}</td>
            <td class="tenant">{reservation.tenant_name()}</td>
            <td class="lodging">{reservation.lodging_label()}</td>
            <td>
                <select
                    ref={select_ref}
                    class="status-select"
                    data-id={data_id.clone()}
                    onchange={on_change}
                >
                    {for ReservationStatus::ALL.iter().map(|status| html! {
                        <option value={status.as_str()} selected={*status == props.status}>
                            {status.label()}
                        </option>
                    })}
                </select>
            </td>
            <td>
                <button class="update-btn" data-id={data_id} onclick={on_click}>
                    {"Mettre à jour"}
                </button>
            </td>
        </tr>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use chrono::NaiveDate;
    use gloo::timers::future::TimeoutFuture;
    use shared::{
        DashboardState, Lodging, LodgingId, ReservationId, StatusUpdate, Tenant, WeekNumber,
        WeekPartition,
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement};

    use crate::dom::document;
    use crate::hooks::use_dashboard::{DashboardAction, DashboardStore};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        reservations: Vec<Reservation>,
        #[prop_or_default]
        confirm: Option<StatusUpdate>,
        on_commit: Callback<StatusSelection>,
    }

    /// Both tables over the same list, driven by the dashboard reducer
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let store = use_reducer({
            let reservations = props.reservations.clone();
            move || {
                let state = DashboardState::for_week(WeekNumber::new(10));
                let request = state.pending_request();
                let partition = WeekPartition {
                    arrivals: reservations.clone(),
                    departures: reservations,
                };
                DashboardStore(state.apply_load(request, partition))
            }
        });

        {
            let dispatcher = store.dispatcher();
            use_effect_with(props.confirm.clone(), move |confirm| {
                if let Some(update) = confirm.clone() {
                    dispatcher.dispatch(DashboardAction::ConfirmStatus(update));
                }
                || ()
            });
        }

        let on_select = {
            let dispatcher = store.dispatcher();
            Callback::from(move |selection: StatusSelection| {
                dispatcher.dispatch(DashboardAction::SelectStatus(
                    selection.lodging_id,
                    selection.status,
                ));
            })
        };

        let state = &store.0;
        html! {
            <>
                <ReservationTable
                    kind={TableKind::Arrivals}
                    reservations={state.arrivals.clone()}
                    statuses={state.statuses.clone()}
                    locale={DisplayLocale::FrFr}
                    on_select={on_select.clone()}
                    on_commit={props.on_commit.clone()}
                />
                <ReservationTable
                    kind={TableKind::Departures}
                    reservations={state.departures.clone()}
                    statuses={state.statuses.clone()}
                    locale={DisplayLocale::FrFr}
                    on_select={on_select}
                    on_commit={props.on_commit.clone()}
                />
            </>
        }
    }

    fn booking(id: &str, lodging: Option<&str>, with_tenant: bool) -> Reservation {
        Reservation {
            id: ReservationId::new(id),
            date_start: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            date_end: NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
            status: ReservationStatus::Pending,
            tenant: with_tenant.then(|| Tenant {
                firstname: "Inès".to_string(),
                lastname: "Garnier".to_string(),
            }),
            lodging: lodging.map(|id| Lodging {
                id: LodgingId::new(id),
                label: format!("Emplacement {}", id),
            }),
        }
    }

    fn mount(props: HarnessProps) -> Element {
        let document = document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        yew::Renderer::<Harness>::with_root_and_props(host.clone(), props).render();
        host
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    fn find<T: JsCast>(host: &Element, selector: &str) -> T {
        host.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<T>()
            .unwrap()
    }

    fn pick(select: &HtmlSelectElement, value: &str) {
        select.set_value(value);
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("change", &init).unwrap();
        select.dispatch_event(&event).unwrap();
    }

    fn recorder() -> (Rc<RefCell<Vec<StatusSelection>>>, Callback<StatusSelection>) {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let commits = commits.clone();
            Callback::from(move |selection: StatusSelection| commits.borrow_mut().push(selection))
        };
        (commits, callback)
    }

    #[wasm_bindgen_test]
    async fn test_missing_tenant_and_lodging_render_as_empty_cells() {
        let (_, on_commit) = recorder();
        let host = mount(HarnessProps {
            reservations: vec![booking("1", None, false), booking("2", Some("3"), true)],
            confirm: None,
            on_commit,
        });
        settle().await;

        let rows = host.query_selector_all("#liste-entry tr").unwrap();
        assert_eq!(rows.length(), 2);

        let tenant: Element = find(&host, "#liste-entry tr:first-child td.tenant");
        let lodging: Element = find(&host, "#liste-entry tr:first-child td.lodging");
        assert_eq!(tenant.text_content().unwrap_or_default(), "");
        assert_eq!(lodging.text_content().unwrap_or_default(), "");

        let select: Element = find(&host, "#liste-entry tr:first-child select");
        assert!(!select.has_attribute("data-id"));

        let tenant: Element = find(&host, "#liste-entry tr:last-child td.tenant");
        assert_eq!(tenant.text_content().unwrap_or_default(), "Inès Garnier");
    }

    #[wasm_bindgen_test]
    async fn test_confirmed_status_shows_in_dropdown() {
        let (_, on_commit) = recorder();
        let host = mount(HarnessProps {
            reservations: vec![booking("9", Some("5"), true)],
            confirm: Some(StatusUpdate {
                lodging_id: LodgingId::new("5"),
                status: ReservationStatus::Available,
            }),
            on_commit,
        });
        settle().await;

        let arrival: HtmlSelectElement = find(&host, "#liste-entry select[data-id=\"5\"]");
        let departure: HtmlSelectElement = find(&host, "#liste-exit select[data-id=\"5\"]");
        assert_eq!(arrival.value(), "available");
        assert_eq!(departure.value(), "available");
    }

    #[wasm_bindgen_test]
    async fn test_touched_dropdown_follows_later_pick_on_same_lodging() {
        let (commits, on_commit) = recorder();
        let host = mount(HarnessProps {
            reservations: vec![booking("4", Some("8"), true)],
            confirm: None,
            on_commit,
        });
        settle().await;

        let arrival: HtmlSelectElement = find(&host, "#liste-entry select[data-id=\"8\"]");
        let departure: HtmlSelectElement = find(&host, "#liste-exit select[data-id=\"8\"]");

        pick(&arrival, "available");
        settle().await;
        pick(&departure, "unavailable");
        settle().await;

        assert_eq!(arrival.value(), "unavailable");

        let button: HtmlElement = find(&host, "#liste-entry button[data-id=\"8\"]");
        button.click();

        assert_eq!(
            commits.borrow().last(),
            Some(&StatusSelection {
                lodging_id: Some(LodgingId::new("8")),
                status: ReservationStatus::Unavailable,
            })
        );
    }

    #[wasm_bindgen_test]
    async fn test_commit_sends_value_shown_in_row() {
        let (commits, on_commit) = recorder();
        let host = mount(HarnessProps {
            reservations: vec![booking("6", Some("11"), true)],
            confirm: None,
            on_commit,
        });
        settle().await;

        // Value changed on the element without going through the board
        let select: HtmlSelectElement = find(&host, "#liste-exit select[data-id=\"11\"]");
        select.set_value("available");

        let button: HtmlElement = find(&host, "#liste-exit button[data-id=\"11\"]");
        button.click();

        assert_eq!(
            commits.borrow().as_slice(),
            &[StatusSelection {
                lodging_id: Some(LodgingId::new("11")),
                status: ReservationStatus::Available,
            }]
        );
    }
}
