use chrono::NaiveDate;
use shared::{week_end, week_label, week_start, Direction, DisplayLocale, WeekNumber};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekNavigatorProps {
    pub week: WeekNumber,
    /// Picks the year the week belongs to
    pub today: NaiveDate,
    pub locale: DisplayLocale,
    pub loading: bool,
    pub on_change_week: Callback<Direction>,
}

fn range_label(week: WeekNumber, today: NaiveDate, locale: DisplayLocale) -> String {
    format!(
        "du {} au {}",
        locale.format_date(week_start(week, today)),
        locale.format_date(week_end(week, today))
    )
}

/// Previous/next buttons around the current week label
#[function_component(WeekNavigator)]
pub fn week_navigator(props: &WeekNavigatorProps) -> Html {
    let step = |direction: Direction| {
        let on_change_week = props.on_change_week.clone();
        Callback::from(move |_: MouseEvent| on_change_week.emit(direction))
    };

    html! {
        <div id="weeks-container" class="weeks-container">
            <button class="week-nav-btn" onclick={step(Direction::Previous)}>
                {Direction::Previous.button_label()}
            </button>
            <span id="current-week">{week_label(props.week)}</span>
            <span class="week-range">{range_label(props.week, props.today, props.locale)}</span>
            {if props.loading {
                html! { <span class="loading">{"Chargement…"}</span> }
            } else {
                html! {}
            }}
            <button class="week-nav-btn" onclick={step(Direction::Next)}>
                {Direction::Next.button_label()}
            </button>
        </div>
    }
}
