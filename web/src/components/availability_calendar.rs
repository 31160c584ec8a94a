use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::calendar::{
    build_grid, select_date, AvailableDates, CalendarCursor, CalendarDay, CalendarGrid,
    SelectedDate, WEEKDAY_LABELS,
};
use thaw::*;

/// Month calendar where only dates in `available_dates` can be picked.
///
/// Opens on the month of `selected_date`, or of `today` when nothing is
/// selected. The grid is rebuilt whenever the displayed month or the
/// available dates change. A click is only forwarded when `select_date`
/// accepts it, together with the grid it was made on.
#[component]
pub fn AvailabilityCalendar(
    today: NaiveDate,
    #[prop(into)] available_dates: Signal<Vec<String>>,
    #[prop(into)] selected_date: Signal<Option<String>>,
    on_date_selected: impl Fn(SelectedDate, CalendarGrid) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let cursor = RwSignal::new(CalendarCursor::from_initial(
        selected_date.get_untracked().as_deref(),
        today,
    ));

    let available = Memo::new(move |_| {
        available_dates
            .get()
            .into_iter()
            .collect::<AvailableDates>()
    });

    let grid = Memo::new(move |_| {
        let cursor = cursor.get();
        available.with(|dates| build_grid(cursor, dates))
    });

    let handle_pick = move |iso_date: String| {
        let rendered = grid.get_untracked();
        match select_date(&iso_date, &rendered) {
            Ok(date) => on_date_selected(date, rendered),
            Err(e) => {
                leptos::logging::warn!("Ignoring calendar click: {}", e);
            }
        }
    };

    view! {
        <div class="availability-calendar">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| cursor.update(|c| *c = c.previous_month())
                >
                    "←"
                </Button>

                <div class="month-label">{move || cursor.get().label()}</div>

                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| cursor.update(|c| *c = c.next_month())
                >
                    "→"
                </Button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="weekday">{*label}</div> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="calendar-weeks">
                {move || {
                    let selected = selected_date.get();
                    grid.get()
                        .weeks
                        .into_iter()
                        .map(|week| {
                            let selected = selected.clone();
                            view! {
                                <div class="calendar-week">
                                    {week
                                        .into_iter()
                                        .map(move |cell| match cell {
                                            Some(day) => {
                                                let is_selected = day.is_selected(selected.as_deref());
                                                let CalendarDay { day_of_month, iso_date, is_available } = day;
                                                view! {
                                                    <button
                                                        class="calendar-day"
                                                        class:available=is_available
                                                        class:unavailable=!is_available
                                                        class:selected=is_selected
                                                        disabled=!is_available
                                                        on:click=move |_| handle_pick(iso_date.clone())
                                                    >
                                                        {day_of_month}
                                                    </button>
                                                }
                                                    .into_any()
                                            }
                                            None => view! { <div class="calendar-day empty"></div> }.into_any(),
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <p class="calendar-hint">"Only highlighted dates are available."</p>
        </div>
    }
}
