use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use shared_types::calendar::{CalendarGrid, SelectedDate};
use shared_types::packages::format_price;
use shared_types::{AvailableDates, BookingStep, BookingSummary, BookingWizard};
use thaw::*;

use crate::components::{
    availability_calendar::AvailabilityCalendar, error::ErrorView, loading::LoadingView,
    package_card::PackageCard, step_indicator::StepIndicator,
};
use crate::server::{get_available_dates, get_today, get_tour_packages};

#[component]
pub fn BookingPage() -> impl IntoView {
    let query = use_query_map();

    // ?step=<n> seeds the starting step
    let initial_step = query
        .with_untracked(|q| q.get("step"))
        .as_deref()
        .and_then(BookingStep::from_query)
        .unwrap_or_default();

    let wizard = RwSignal::new(BookingWizard::at_step(initial_step));
    let summary = RwSignal::new(None::<BookingSummary>);
    let form_error = RwSignal::new(None::<String>);

    // Form fields
    let selected_date = Signal::derive(move || wizard.with(|w| w.form.booking_date.clone()));
    let customer_name = RwSignal::new(String::new());
    let customer_email = RwSignal::new(String::new());
    let customer_phone = RwSignal::new(String::new());
    let num_people = RwSignal::new("1".to_string());

    let packages = Resource::new(|| (), |_| async move { get_tour_packages().await });
    let today = Resource::new(|| (), |_| async move { get_today().await });
    let available_dates = Resource::new(
        || (),
        |_| async move {
            match get_available_dates(None, None).await {
                Ok(dates) => dates,
                Err(e) => {
                    leptos::logging::error!("Failed to fetch available dates: {}", e);
                    vec![]
                }
            }
        },
    );
    let available_list = Signal::derive(move || available_dates.get().unwrap_or_default());

    let current_step = Memo::new(move |_| wizard.with(|w| w.step));

    // Preselect the package passed as ?package=<id>
    Effect::new(move |_| {
        let requested = query
            .read()
            .get("package")
            .and_then(|id| id.parse::<i32>().ok());

        if let (Some(id), Some(Ok(list))) = (requested, packages.get()) {
            if wizard.with_untracked(|w| w.package.is_none()) {
                if let Some(package) = list.into_iter().find(|p| p.id == id) {
                    wizard.update(|w| w.select_package(package));
                }
            }
        }
    });

    let on_date_selected = move |date: SelectedDate, grid: CalendarGrid| {
        match wizard.try_update(|w| w.choose_date(date.as_str(), &grid)) {
            Some(Ok(())) => form_error.set(None),
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let handle_submit = move || {
        let available: AvailableDates = available_list.get_untracked().into_iter().collect();

        let result = wizard.try_update(|w| {
            w.form.customer_name = customer_name.get_untracked();
            w.form.customer_email = customer_email.get_untracked();
            w.form.customer_phone = customer_phone.get_untracked();
            w.form.num_people = num_people.get_untracked().trim().parse().unwrap_or(0);
            w.submit_details(&available)
        });

        match result {
            Some(Ok(booking)) => {
                leptos::logging::log!(
                    "Booking details accepted for package {} on {}",
                    booking.package_id,
                    booking.booking_date
                );
                form_error.set(None);
                summary.set(Some(booking));
            }
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let go_back = move || {
        form_error.set(None);
        wizard.update(|w| w.back());
    };

    view! {
        <div class="booking-container">
            <h1 class="booking-title">"Book Your Experience"</h1>

            <StepIndicator current=current_step/>

            {move || match current_step.get() {
                BookingStep::ChoosePackage => view! {
                    <Suspense fallback=move || view! { <LoadingView message=None/> }>
                        {move || match packages.get() {
                            None => view! {}.into_any(),
                            Some(Err(e)) => view! {
                                <ErrorView message=Some(format!("Failed to load packages: {}", e))/>
                            }
                                .into_any(),
                            Some(Ok(list)) => view! {
                                <div class="booking-package-grid">
                                    {list
                                        .into_iter()
                                        .map(|package| {
                                            let chosen = package.clone();
                                            view! {
                                                <PackageCard package=package>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        on_click=move |_| {
                                                            let chosen = chosen.clone();
                                                            wizard.update(|w| w.select_package(chosen));
                                                        }
                                                    >
                                                        "Select Package"
                                                    </Button>
                                                </PackageCard>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                        }}
                    </Suspense>
                }
                    .into_any(),

                BookingStep::DateAndDetails => view! {
                    <form
                        class="booking-details-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            handle_submit();
                        }
                    >
                        <div class="booking-date-section">
                            <label class="booking-label">"Select an Available Date"</label>
                            <Suspense fallback=move || view! {
                                <LoadingView message=Some("Checking availability...".to_string())/>
                            }>
                                {move || {
                                    let _ = available_dates.get()?;
                                    let today = today.get()?.unwrap_or_else(|e| {
                                        leptos::logging::error!("Failed to fetch today's date: {}", e);
                                        chrono::Local::now().date_naive()
                                    });
                                    Some(view! {
                                        <AvailabilityCalendar
                                            today=today
                                            available_dates=available_list
                                            selected_date=selected_date
                                            on_date_selected=on_date_selected
                                        />
                                    })
                                }}
                            </Suspense>
                        </div>

                        <div class="booking-card">
                            <h3 class="booking-card-title">"Your Details"</h3>
                            <Input placeholder="Full Name" value=customer_name/>
                            <Input input_type=InputType::Email placeholder="Email" value=customer_email/>
                            <Input input_type=InputType::Tel placeholder="Phone Number" value=customer_phone/>
                        </div>

                        <div class="booking-card">
                            <h3 class="booking-card-title">"Booking Info"</h3>
                            <Input input_type=InputType::Number placeholder="Number of People" value=num_people/>
                            <p class="booking-selected-package">
                                {move || wizard.with(|w| {
                                    w.package.as_ref().map(|p| p.name.clone()).unwrap_or_default()
                                })}
                            </p>
                        </div>

                        {move || form_error.get().map(|message| view! { <ErrorView message=Some(message)/> })}

                        <div class="booking-actions">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| go_back()>
                                "← Back"
                            </Button>
                            <button type="submit" class="booking-submit">
                                "Continue to Payment →"
                            </button>
                        </div>
                    </form>
                }
                    .into_any(),

                BookingStep::Payment => view! {
                    <section class="booking-payment">
                        <h2 class="booking-payment-title">"Payment"</h2>
                        {move || match summary.get() {
                            Some(booking) => view! {
                                <dl class="booking-summary">
                                    <dt>"Package"</dt>
                                    <dd>{booking.package_name.clone()}</dd>
                                    <dt>"Date"</dt>
                                    <dd>{booking.booking_date.clone()}</dd>
                                    <dt>"Guest"</dt>
                                    <dd>{format!("{} <{}>", booking.customer_name, booking.customer_email)}</dd>
                                    <dt>"People"</dt>
                                    <dd>{booking.num_people}</dd>
                                    <dt>"Total"</dt>
                                    <dd class="booking-summary-total">{format_price(booking.total_price)}</dd>
                                </dl>
                                <p class="booking-payment-note">
                                    "Online payment isn't available yet. Our team will email you payment instructions."
                                </p>
                            }
                                .into_any(),
                            None => view! {
                                <ErrorView message=Some("No booking found.".to_string())/>
                            }
                                .into_any(),
                        }}
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| go_back()>
                            "← Edit Details"
                        </Button>
                    </section>
                }
                    .into_any(),
            }}
        </div>
    }
}
